//! Stores en memoria
//!
//! Implementaciones en memoria de los puertos de almacenamiento. Cada
//! colección es un Vec detrás de un RwLock: lectura-modificación-escritura
//! de la colección entera, reemplazo en el sitio o agregado al final,
//! conservando el orden de inserción para que los listados sean estables.
//! Respaldan las suites de tests del motor; el binario usa Postgres.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{booking::Booking, customer::Customer, vehicle::Vehicle};
use crate::repositories::traits::{BookingStore, CustomerStore, Stores, VehicleStore};
use crate::utils::errors::AppError;

#[derive(Default)]
pub struct InMemoryVehicleStore {
    items: RwLock<Vec<Vehicle>>,
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        Ok(self.items.read().await.iter().find(|v| v.id == id).cloned())
    }

    async fn save(&self, vehicle: Vehicle) -> Result<Vehicle, AppError> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|v| v.id == vehicle.id) {
            Some(existing) => *existing = vehicle.clone(),
            None => items.push(vehicle.clone()),
        }
        Ok(vehicle)
    }
}

#[derive(Default)]
pub struct InMemoryBookingStore {
    items: RwLock<Vec<Booking>>,
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn list(&self, branch_id: Option<Uuid>) -> Result<Vec<Booking>, AppError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|b| branch_id.map_or(true, |id| b.branch_id == id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        Ok(self.items.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn save(&self, booking: Booking) -> Result<Booking, AppError> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|b| b.id == booking.id) {
            Some(existing) => *existing = booking.clone(),
            None => items.push(booking.clone()),
        }
        Ok(booking)
    }
}

#[derive(Default)]
pub struct InMemoryCustomerStore {
    items: RwLock<Vec<Customer>>,
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn list(&self, branch_id: Option<Uuid>) -> Result<Vec<Customer>, AppError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|c| branch_id.map_or(true, |id| c.branch_id == id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        Ok(self.items.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|c| c.id == customer.id) {
            Some(existing) => *existing = customer.clone(),
            None => items.push(customer.clone()),
        }
        Ok(customer)
    }
}

/// Conjunto de stores en memoria listo para usar en tests
pub fn in_memory_stores() -> Stores {
    Stores {
        vehicles: Arc::new(InMemoryVehicleStore::default()),
        bookings: Arc::new(InMemoryBookingStore::default()),
        customers: Arc::new(InMemoryCustomerStore::default()),
    }
}
