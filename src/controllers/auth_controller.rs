//! Controller de autenticación

use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::user_dto::UserResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::user_repository::UserRepository;
use crate::services::auth_service::AuthService;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub struct AuthController {
    service: AuthService,
    users: UserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self {
            service: AuthService::new(pool.clone(), jwt),
            users: UserRepository::new(pool),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let (token, user) = self.service.login(&request.username, &request.password).await?;

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    /// Datos del actor autenticado actual
    pub async fn me(&self, user: &AuthenticatedUser) -> Result<UserResponse, AppError> {
        let found = self
            .users
            .find_by_id(user.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(found))
    }
}
