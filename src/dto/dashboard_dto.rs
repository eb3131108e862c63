//! DTOs del dashboard

use rust_decimal::Decimal;
use serde::Serialize;

/// Conteo de vehículos por estado
#[derive(Debug, Default, Serialize)]
pub struct FleetStats {
    pub total: i64,
    pub available: i64,
    pub booked: i64,
    pub maintenance: i64,
    pub archived: i64,
}

/// Conteo de reservas por estado
#[derive(Debug, Default, Serialize)]
pub struct BookingStats {
    pub total: i64,
    pub pending: i64,
    pub ongoing: i64,
    pub completed: i64,
    pub cancelled: i64,
    pub archived: i64,
}

/// Conteo de clientes por tipo
#[derive(Debug, Default, Serialize)]
pub struct CustomerStats {
    pub total: i64,
    pub new: i64,
    pub returning: i64,
    pub archived: i64,
}

/// Reservas iniciadas por mes (clave "YYYY-MM")
#[derive(Debug, Serialize)]
pub struct MonthlyBookings {
    pub month: String,
    pub count: i64,
}

/// Resumen agregado del dashboard
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub fleet: FleetStats,
    pub bookings: BookingStats,
    pub customers: CustomerStats,
    pub revenue_completed: Decimal,
    pub total_km_driven: i64,
    pub bookings_per_month: Vec<MonthlyBookings>,
}
