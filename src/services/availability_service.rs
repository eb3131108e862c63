//! Servicio de disponibilidad
//!
//! Responde "¿qué vehículos están libres en el intervalo [start, end]?"
//! y "¿está libre el vehículo V?", excluyendo opcionalmente una reserva
//! (al editar una reserva, su propio intervalo no cuenta como conflicto).
//! Sin efectos secundarios: solo lee las colecciones.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::repositories::traits::Stores;
use crate::utils::errors::AppError;

pub struct AvailabilityService {
    stores: Stores,
}

impl AvailabilityService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Verifica si un vehículo está libre de conflictos de agenda en el
    /// intervalo dado. Solo las reservas canceladas quedan fuera del
    /// escaneo; las completadas siguen bloqueando su intervalo.
    pub async fn is_vehicle_available(
        &self,
        vehicle_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_booking_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let bookings = self.stores.bookings.list(None).await?;

        let conflict = bookings.iter().any(|b| {
            b.vehicle_id == vehicle_id
                && Some(b.id) != exclude_booking_id
                && b.blocks_schedule()
                && b.overlaps(start, end)
        });

        Ok(!conflict)
    }

    /// Lista los vehículos libres en el intervalo. Los archivados o en
    /// mantenimiento nunca se ofrecen, tengan agenda o no. El orden de
    /// salida es el orden estable del store.
    pub async fn available_vehicles(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_booking_id: Option<Uuid>,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = self.stores.vehicles.list().await?;
        let bookings = self.stores.bookings.list(None).await?;

        let available = vehicles
            .into_iter()
            .filter(|v| v.is_offerable())
            .filter(|v| {
                !bookings.iter().any(|b| {
                    b.vehicle_id == v.id
                        && Some(b.id) != exclude_booking_id
                        && b.blocks_schedule()
                        && b.overlaps(start, end)
                })
            })
            .collect();

        Ok(available)
    }
}
