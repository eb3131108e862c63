//! Controller de sucursales

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::branch_dto::{BranchResponse, CreateBranchRequest, UpdateBranchRequest};
use crate::dto::company_dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::branch_repository::BranchRepository;
use crate::services::authorization_service::AuthorizationService;
use crate::utils::errors::AppError;

pub struct BranchController {
    repository: BranchRepository,
}

impl BranchController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BranchRepository::new(pool),
        }
    }

    fn require_management(user: &AuthenticatedUser) -> Result<(), AppError> {
        if !AuthorizationService::can_manage_companies(user.role) {
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador para gestionar sucursales".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreateBranchRequest,
    ) -> Result<ApiResponse<BranchResponse>, AppError> {
        Self::require_management(user)?;
        request.validate()?;

        let branch = self
            .repository
            .create(request.company_id, request.name, request.address, request.phone)
            .await?;

        Ok(ApiResponse::success_with_message(
            BranchResponse::from(branch),
            "Sucursal creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BranchResponse, AppError> {
        let branch = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sucursal no encontrada".to_string()))?;

        Ok(BranchResponse::from(branch))
    }

    pub async fn list(&self, company_id: Option<Uuid>) -> Result<Vec<BranchResponse>, AppError> {
        let branches = match company_id {
            Some(company) => self.repository.list_by_company(company).await?,
            None => self.repository.list().await?,
        };

        Ok(branches.into_iter().map(BranchResponse::from).collect())
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdateBranchRequest,
    ) -> Result<ApiResponse<BranchResponse>, AppError> {
        Self::require_management(user)?;
        request.validate()?;

        let branch = self
            .repository
            .update(id, request.name, request.address, request.phone)
            .await?;

        Ok(ApiResponse::success_with_message(
            BranchResponse::from(branch),
            "Sucursal actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        Self::require_management(user)?;
        self.repository.delete(id).await
    }
}
