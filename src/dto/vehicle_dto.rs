//! DTOs de Vehicle

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{BodyType, FuelType, Vehicle, VehicleStatus};

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1950, max = 2035))]
    pub year: i32,

    #[validate(length(min = 2, max = 50))]
    pub color: Option<String>,

    pub fuel_type: FuelType,
    pub body_type: BodyType,

    pub price_per_day: Decimal,

    #[validate(range(min = 0))]
    pub current_km: i64,

    pub image_urls: Option<Vec<String>>,
}

/// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2035))]
    pub year: Option<i32>,

    #[validate(length(min = 2, max = 50))]
    pub color: Option<String>,

    pub fuel_type: Option<FuelType>,
    pub body_type: Option<BodyType>,
    pub status: Option<VehicleStatus>,
    pub price_per_day: Option<Decimal>,

    #[validate(range(min = 0))]
    pub current_km: Option<i64>,

    pub image_urls: Option<Vec<String>>,
}

/// Query de disponibilidad: GET /api/vehicles/available
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub exclude_booking: Option<Uuid>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub fuel_type: String,
    pub body_type: String,
    pub status: String,
    pub price_per_day: String,
    pub current_km: i64,
    pub image_urls: Vec<String>,
    pub updated_by_branch: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id.to_string(),
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            color: vehicle.color,
            fuel_type: vehicle.fuel_type.as_str().to_string(),
            body_type: vehicle.body_type.as_str().to_string(),
            status: vehicle.status.as_str().to_string(),
            price_per_day: vehicle.price_per_day.to_string(),
            current_km: vehicle.current_km,
            image_urls: vehicle.image_urls,
            updated_by_branch: vehicle.updated_by_branch.map(|id| id.to_string()),
            created_at: vehicle.created_at.to_rfc3339(),
            updated_at: vehicle.updated_at.to_rfc3339(),
        }
    }
}
