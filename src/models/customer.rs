//! Modelo de Customer
//!
//! El número de pasaporte es la clave de negocio: las escrituras hacen
//! upsert contra los clientes no archivados que compartan pasaporte.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tipo de cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    New,
    Returning,
    Archived,
}

impl CustomerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::New => "new",
            CustomerType::Returning => "returning",
            CustomerType::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "returning" => CustomerType::Returning,
            "archived" => CustomerType::Archived,
            _ => CustomerType::New,
        }
    }
}

/// Customer de la sucursal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub passport_number: String,
    pub visa_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub branch_id: Uuid,
    pub customer_type: CustomerType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn is_archived(&self) -> bool {
        self.customer_type == CustomerType::Archived
    }
}
