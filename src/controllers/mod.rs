//! Controllers del sistema
//!
//! Capa fina entre las rutas y los servicios: valida la entrada,
//! delega y convierte a DTOs de respuesta.

pub mod auth_controller;
pub mod booking_controller;
pub mod branch_controller;
pub mod company_controller;
pub mod customer_controller;
pub mod dashboard_controller;
pub mod user_controller;
pub mod vehicle_controller;
