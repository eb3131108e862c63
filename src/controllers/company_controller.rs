//! Controller de empresas

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::{
    ApiResponse, CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::company_repository::CompanyRepository;
use crate::services::authorization_service::AuthorizationService;
use crate::utils::errors::AppError;

pub struct CompanyController {
    repository: CompanyRepository,
}

impl CompanyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
        }
    }

    fn require_management(user: &AuthenticatedUser) -> Result<(), AppError> {
        if !AuthorizationService::can_manage_companies(user.role) {
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador para gestionar empresas".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreateCompanyRequest,
    ) -> Result<ApiResponse<CompanyResponse>, AppError> {
        Self::require_management(user)?;
        request.validate()?;

        let company = self
            .repository
            .create(request.name, request.email, request.phone)
            .await?;

        Ok(ApiResponse::success_with_message(
            CompanyResponse::from(company),
            "Empresa creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CompanyResponse, AppError> {
        let company = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empresa no encontrada".to_string()))?;

        Ok(CompanyResponse::from(company))
    }

    pub async fn list(&self) -> Result<Vec<CompanyResponse>, AppError> {
        let companies = self.repository.list().await?;
        Ok(companies.into_iter().map(CompanyResponse::from).collect())
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdateCompanyRequest,
    ) -> Result<ApiResponse<CompanyResponse>, AppError> {
        Self::require_management(user)?;
        request.validate()?;

        let company = self
            .repository
            .update(id, request.name, request.email, request.phone)
            .await?;

        Ok(ApiResponse::success_with_message(
            CompanyResponse::from(company),
            "Empresa actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        Self::require_management(user)?;
        self.repository.delete(id).await
    }
}
