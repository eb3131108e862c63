//! Rutas del sistema

pub mod auth_routes;
pub mod booking_routes;
pub mod branch_routes;
pub mod company_routes;
pub mod customer_routes;
pub mod dashboard_routes;
pub mod user_routes;
pub mod vehicle_routes;
