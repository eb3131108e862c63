//! Modelo de Booking
//!
//! La reserva es la entidad central del motor de disponibilidad y del
//! ciclo de vida pending → ongoing → {completed, cancelled} → archived.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado de la reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Ongoing,
    Completed,
    Cancelled,
    Archived,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Ongoing => "ongoing",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "ongoing" => BookingStatus::Ongoing,
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            "archived" => BookingStatus::Archived,
            _ => BookingStatus::Pending,
        }
    }
}

/// Intención de edición en curso sobre una reserva.
///
/// `Complete` es el pseudo-estado transitorio "completing": existe solo
/// mientras se resuelve la transición y nunca se persiste. Guarda el estado
/// persistido previo; si la edición se abandona, ese estado queda intacto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingIntent {
    Update,
    Complete { prior_status: BookingStatus },
}

/// Booking principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_id: Uuid,
    pub branch_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: Decimal,
    pub status: BookingStatus,
    /// Kilometraje al recoger el vehículo
    pub start_km: i64,
    /// Kilometraje al devolverlo; solo se fija al completar
    pub end_km: Option<i64>,
    /// Derivado: end_km - start_km, nunca negativo
    pub km_driven: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Test de solapamiento inclusivo: [s1,e1] y [s2,e2] se solapan
    /// si s1 <= e2 y e1 >= s2.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start <= self.end_date && end >= self.start_date
    }

    /// Las reservas canceladas son las únicas que no bloquean la agenda.
    pub fn blocks_schedule(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dt(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn booking(start: DateTime<Utc>, end: DateTime<Utc>) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
            start_date: start,
            end_date: end,
            total_price: Decimal::ZERO,
            status: BookingStatus::Pending,
            start_km: 0,
            end_km: None,
            km_driven: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_overlap_inclusive_boundaries() {
        let b = booking(dt(2023, 7, 1), dt(2023, 7, 5));
        // Tocar el límite cuenta como solapamiento
        assert!(b.overlaps(dt(2023, 7, 5), dt(2023, 7, 10)));
        assert!(b.overlaps(dt(2023, 6, 25), dt(2023, 7, 1)));
        assert!(!b.overlaps(dt(2023, 7, 6), dt(2023, 7, 10)));
    }

    #[test]
    fn test_overlap_zero_length_interval() {
        let b = booking(dt(2023, 7, 1), dt(2023, 7, 5));
        assert!(b.overlaps(dt(2023, 7, 3), dt(2023, 7, 3)));
        assert!(!b.overlaps(dt(2023, 7, 6), dt(2023, 7, 6)));
    }

    #[test]
    fn test_only_cancelled_frees_schedule() {
        let mut b = booking(dt(2023, 7, 1), dt(2023, 7, 5));
        for status in [
            BookingStatus::Pending,
            BookingStatus::Ongoing,
            BookingStatus::Completed,
            BookingStatus::Archived,
        ] {
            b.status = status;
            assert!(b.blocks_schedule());
        }
        b.status = BookingStatus::Cancelled;
        assert!(!b.blocks_schedule());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Ongoing,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
            BookingStatus::Archived,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_str()), status);
        }
    }
}
