//! Services module
//!
//! Este módulo contiene la lógica de negocio de la consola. El motor de
//! reservas son tres piezas que comparten los mismos stores: el resolutor
//! de disponibilidad, el controlador del ciclo de vida y el sincronizador
//! de flota (invocado solo por el controlador).

pub mod auth_service;
pub mod authorization_service;
pub mod availability_service;
pub mod booking_service;
pub mod customer_service;
pub mod dashboard_service;
pub mod fleet_sync_service;

pub use authorization_service::{AuthorizationService, BookingAction};
pub use availability_service::AvailabilityService;
pub use booking_service::BookingService;
pub use customer_service::{CustomerDetails, CustomerService};
pub use dashboard_service::DashboardService;
pub use fleet_sync_service::FleetSyncService;
