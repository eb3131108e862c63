//! Controller de usuarios

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::ApiResponse;
use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::user_repository::UserRepository;
use crate::services::auth_service::hash_password;
use crate::services::authorization_service::AuthorizationService;
use crate::utils::errors::AppError;

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    fn require_management(user: &AuthenticatedUser) -> Result<(), AppError> {
        if !AuthorizationService::can_manage_users(user.role) {
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador para gestionar usuarios".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        Self::require_management(user)?;
        request.validate()?;

        if self.repository.username_exists(&request.username).await? {
            return Err(AppError::Conflict(
                "El nombre de usuario ya está registrado".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password)?;
        let created = self
            .repository
            .create(request.username, password_hash, request.role, request.branch_id)
            .await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(created),
            "Usuario creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<UserResponse, AppError> {
        // Cada usuario puede verse a sí mismo; el resto requiere admin
        if user.user_id != id {
            Self::require_management(user)?;
        }

        let found = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(found))
    }

    pub async fn list(&self, user: &AuthenticatedUser) -> Result<Vec<UserResponse>, AppError> {
        Self::require_management(user)?;
        let users = self.repository.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        Self::require_management(user)?;
        request.validate()?;

        let password_hash = match request.password {
            Some(password) => Some(hash_password(&password)?),
            None => None,
        };

        let updated = self
            .repository
            .update(id, password_hash, request.role, request.branch_id, request.status)
            .await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(updated),
            "Usuario actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        Self::require_management(user)?;

        if user.user_id == id {
            return Err(AppError::Conflict(
                "No puedes eliminar tu propio usuario".to_string(),
            ));
        }

        self.repository.delete(id).await
    }
}
