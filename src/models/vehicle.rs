//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus enums de dominio.
//! El estado del vehículo lo mantiene sincronizado el FleetSyncService
//! a partir de los eventos del ciclo de vida de las reservas.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tipo de combustible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "diesel" => FuelType::Diesel,
            "electric" => FuelType::Electric,
            "hybrid" => FuelType::Hybrid,
            _ => FuelType::Petrol,
        }
    }
}

/// Tipo de carrocería
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Sedan,
    Suv,
    Hatchback,
    Luxury,
    Van,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Sedan => "sedan",
            BodyType::Suv => "suv",
            BodyType::Hatchback => "hatchback",
            BodyType::Luxury => "luxury",
            BodyType::Van => "van",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "suv" => BodyType::Suv,
            "hatchback" => BodyType::Hatchback,
            "luxury" => BodyType::Luxury,
            "van" => BodyType::Van,
            _ => BodyType::Sedan,
        }
    }
}

/// Estado del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Booked,
    Maintenance,
    Archived,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Booked => "booked",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "booked" => VehicleStatus::Booked,
            "maintenance" => VehicleStatus::Maintenance,
            "archived" => VehicleStatus::Archived,
            _ => VehicleStatus::Available,
        }
    }
}

/// Vehicle principal de la flota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub fuel_type: FuelType,
    pub body_type: BodyType,
    pub status: VehicleStatus,
    pub price_per_day: Decimal,
    /// Kilometraje actual; solo avanza, nunca retrocede.
    pub current_km: i64,
    pub image_urls: Vec<String>,
    /// Última sucursal que modificó el vehículo
    pub updated_by_branch: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Un vehículo archivado o en mantenimiento nunca se ofrece,
    /// independientemente de su agenda.
    pub fn is_offerable(&self) -> bool {
        !matches!(self.status, VehicleStatus::Archived | VehicleStatus::Maintenance)
    }
}
