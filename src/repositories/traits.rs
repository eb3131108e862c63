//! Puertos de almacenamiento
//!
//! Interfaces de repositorio para las colecciones que alimentan el motor
//! de reservas. Cada store devuelve siempre la colección completa pedida
//! (o el subconjunto filtrado por sucursal), nunca resultados paginados.
//! `save` hace upsert por id: reemplaza en el sitio o agrega al final.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{booking::Booking, customer::Customer, vehicle::Vehicle};
use crate::utils::errors::AppError;

/// Colección de vehículos
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Listar todos los vehículos en orden estable
    async fn list(&self) -> Result<Vec<Vehicle>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError>;

    /// Upsert por id
    async fn save(&self, vehicle: Vehicle) -> Result<Vehicle, AppError>;
}

/// Colección de reservas
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Listar reservas, opcionalmente filtradas por sucursal
    async fn list(&self, branch_id: Option<Uuid>) -> Result<Vec<Booking>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError>;

    /// Upsert por id
    async fn save(&self, booking: Booking) -> Result<Booking, AppError>;
}

/// Colección de clientes
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Listar clientes, opcionalmente filtrados por sucursal
    async fn list(&self, branch_id: Option<Uuid>) -> Result<Vec<Customer>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError>;

    /// Upsert por id (el upsert por pasaporte lo resuelve el CustomerService)
    async fn save(&self, customer: Customer) -> Result<Customer, AppError>;
}

/// Conjunto de puertos que comparten los componentes del motor
#[derive(Clone)]
pub struct Stores {
    pub vehicles: Arc<dyn VehicleStore>,
    pub bookings: Arc<dyn BookingStore>,
    pub customers: Arc<dyn CustomerStore>,
}
