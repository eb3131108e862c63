//! Controller de clientes

use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::ApiResponse;
use crate::dto::customer_dto::{CustomerResponse, SaveCustomerRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::traits::Stores;
use crate::services::customer_service::{CustomerDetails, CustomerService};
use crate::utils::errors::AppError;

pub struct CustomerController {
    service: CustomerService,
}

impl CustomerController {
    pub fn new(stores: Stores) -> Self {
        Self {
            service: CustomerService::new(stores),
        }
    }

    /// Alta o actualización por pasaporte
    pub async fn save(
        &self,
        request: SaveCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, AppError> {
        request.validate()?;

        let customer = self
            .service
            .upsert_by_passport(
                CustomerDetails {
                    name: request.name,
                    passport_number: request.passport_number,
                    visa_number: request.visa_number,
                    phone: request.phone,
                    email: request.email,
                    address: request.address,
                },
                request.branch_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CustomerResponse::from(customer),
            "Cliente guardado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CustomerResponse, AppError> {
        let customer = self.service.get(id).await?;
        Ok(CustomerResponse::from(customer))
    }

    pub async fn list(
        &self,
        user: &AuthenticatedUser,
        branch_filter: Option<Uuid>,
    ) -> Result<Vec<CustomerResponse>, AppError> {
        let branch = match user.role.is_admin() {
            true => branch_filter,
            false => user.branch_id.or(branch_filter),
        };

        let customers = self.service.list(branch).await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn archive(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<CustomerResponse>, AppError> {
        let customer = self.service.archive(user.role, id).await?;
        Ok(ApiResponse::success_with_message(
            CustomerResponse::from(customer),
            "Cliente archivado".to_string(),
        ))
    }

    pub async fn restore(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<CustomerResponse>, AppError> {
        let customer = self.service.restore(user.role, id).await?;
        Ok(ApiResponse::success_with_message(
            CustomerResponse::from(customer),
            "Cliente restaurado".to_string(),
        ))
    }
}
