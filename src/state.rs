//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::booking_repository::PgBookingRepository;
use crate::repositories::customer_repository::PgCustomerRepository;
use crate::repositories::traits::Stores;
use crate::repositories::vehicle_repository::PgVehicleRepository;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    /// Puertos de almacenamiento del motor de reservas
    pub stores: Stores,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let stores = Stores {
            vehicles: Arc::new(PgVehicleRepository::new(pool.clone())),
            bookings: Arc::new(PgBookingRepository::new(pool.clone())),
            customers: Arc::new(PgCustomerRepository::new(pool.clone())),
        };

        Self {
            pool,
            config,
            stores,
        }
    }
}
