//! DTOs de Customer

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::customer::Customer;

/// Request para crear o actualizar un cliente (upsert por pasaporte)
#[derive(Debug, Deserialize, Validate)]
pub struct SaveCustomerRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 5, max = 20))]
    pub passport_number: String,

    pub visa_number: Option<String>,
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub address: Option<String>,
    pub branch_id: Uuid,
}

/// Filtros de listado de clientes
#[derive(Debug, Deserialize)]
pub struct CustomerFilters {
    pub branch_id: Option<Uuid>,
}

/// Response de cliente para la API
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub passport_number: String,
    pub visa_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub branch_id: String,
    pub customer_type: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            name: customer.name,
            passport_number: customer.passport_number,
            visa_number: customer.visa_number,
            phone: customer.phone,
            email: customer.email,
            address: customer.address,
            branch_id: customer.branch_id.to_string(),
            customer_type: customer.customer_type.as_str().to_string(),
            created_at: customer.created_at.to_rfc3339(),
            updated_at: customer.updated_at.to_rfc3339(),
        }
    }
}
