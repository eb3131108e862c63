//! DTOs de Booking

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::{Booking, BookingStatus};

/// Datos de cliente en línea al crear una reserva
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InlineCustomerRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 5, max = 20))]
    pub passport_number: String,

    pub visa_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Request para crear una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub vehicle_id: Uuid,

    /// Cliente existente, o bien `customer` para alta en línea
    pub customer_id: Option<Uuid>,

    #[validate]
    pub customer: Option<InlineCustomerRequest>,

    pub branch_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    /// Si falta se calcula con días * precio por día del vehículo
    pub total_price: Option<Decimal>,

    /// pending (default) u ongoing
    pub status: Option<BookingStatus>,
}

/// Request para actualizar una reserva.
/// Un estado objetivo `completed` se resuelve por la vía de completado
/// y requiere `end_km`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookingRequest {
    pub vehicle_id: Option<Uuid>,
    pub customer_id: Option<Uuid>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub total_price: Option<Decimal>,
    pub status: Option<BookingStatus>,

    #[validate(range(min = 0))]
    pub end_km: Option<i64>,
}

/// Request de completado: un actor no privilegiado solo puede aportar
/// estos campos; el resto queda congelado en sus valores actuales.
#[derive(Debug, Deserialize)]
pub struct CompleteBookingRequest {
    pub end_km: Option<i64>,
    pub total_price: Option<Decimal>,
}

/// Filtros de listado de reservas
#[derive(Debug, Deserialize)]
pub struct BookingFilters {
    pub branch_id: Option<Uuid>,
}

/// Response de reserva para la API
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub vehicle_id: String,
    pub customer_id: String,
    pub branch_id: String,
    pub start_date: String,
    pub end_date: String,
    pub total_price: String,
    pub status: String,
    pub start_km: i64,
    pub end_km: Option<i64>,
    pub km_driven: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            vehicle_id: booking.vehicle_id.to_string(),
            customer_id: booking.customer_id.to_string(),
            branch_id: booking.branch_id.to_string(),
            start_date: booking.start_date.to_rfc3339(),
            end_date: booking.end_date.to_rfc3339(),
            total_price: booking.total_price.to_string(),
            status: booking.status.as_str().to_string(),
            start_km: booking.start_km,
            end_km: booking.end_km,
            km_driven: booking.km_driven,
            created_at: booking.created_at.to_rfc3339(),
            updated_at: booking.updated_at.to_rfc3339(),
        }
    }
}
