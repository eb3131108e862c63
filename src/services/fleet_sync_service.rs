//! Sincronizador de estado de flota
//!
//! Propaga los eventos del ciclo de vida de las reservas al estado del
//! vehículo (status y odómetro). Componente de efectos secundarios puro:
//! lo invoca el BookingService, nunca la capa HTTP directamente.
//!
//! Si el vehículo referenciado ya no existe, la inconsistencia se registra
//! en el log y la operación de reserva continúa: el vehículo pudo haberse
//! eliminado concurrentemente en otra sesión.

use chrono::Utc;
use tracing::warn;

use crate::models::booking::Booking;
use crate::models::vehicle::VehicleStatus;
use crate::repositories::traits::Stores;
use crate::utils::errors::AppError;

pub struct FleetSyncService {
    stores: Stores,
}

impl FleetSyncService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Al crear una reserva el vehículo pasa a `booked`.
    pub async fn on_booking_created(&self, booking: &Booking) -> Result<(), AppError> {
        match self.stores.vehicles.find_by_id(booking.vehicle_id).await? {
            Some(mut vehicle) => {
                vehicle.status = VehicleStatus::Booked;
                vehicle.updated_at = Utc::now();
                self.stores.vehicles.save(vehicle).await?;
            }
            None => {
                warn!(
                    booking_id = %booking.id,
                    vehicle_id = %booking.vehicle_id,
                    "Reserva creada sobre un vehículo inexistente"
                );
            }
        }
        Ok(())
    }

    /// Al completar una reserva el odómetro del vehículo avanza a end_km
    /// y el vehículo vuelve a `available`.
    pub async fn on_booking_completed(&self, booking: &Booking) -> Result<(), AppError> {
        let Some(end_km) = booking.end_km else {
            warn!(booking_id = %booking.id, "Reserva completada sin end_km");
            return Ok(());
        };

        match self.stores.vehicles.find_by_id(booking.vehicle_id).await? {
            Some(mut vehicle) => {
                vehicle.current_km = end_km;
                vehicle.status = VehicleStatus::Available;
                vehicle.updated_at = Utc::now();
                self.stores.vehicles.save(vehicle).await?;
            }
            None => {
                warn!(
                    booking_id = %booking.id,
                    vehicle_id = %booking.vehicle_id,
                    "Reserva completada sobre un vehículo inexistente"
                );
            }
        }
        Ok(())
    }
}
