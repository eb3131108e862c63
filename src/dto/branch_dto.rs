//! DTOs de Branch

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::branch::Branch;

/// Request para crear una sucursal
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBranchRequest {
    pub company_id: Uuid,

    #[validate(length(min = 2, max = 100))]
    pub name: String,

    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Request para actualizar una sucursal
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBranchRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Response de sucursal
#[derive(Debug, Serialize)]
pub struct BranchResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Branch> for BranchResponse {
    fn from(branch: Branch) -> Self {
        Self {
            id: branch.id,
            company_id: branch.company_id,
            name: branch.name,
            address: branch.address,
            phone: branch.phone,
            created_at: branch.created_at,
        }
    }
}
