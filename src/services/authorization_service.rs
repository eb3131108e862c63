//! Servicio de autorización
//!
//! Tabla de permisos explícita (rol, acción) → permitido. El controlador
//! del ciclo de vida de reservas consulta esta tabla en vez de comparar
//! strings de rol repartidos por el código.

use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::models::booking::BookingStatus;
use crate::models::user::UserRole;

/// Acciones gobernadas por la tabla de permisos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingAction {
    SetPending,
    SetOngoing,
    SetCancelled,
    SetArchived,
    /// Transición ongoing → completed con lectura de odómetro
    Complete,
    /// Editar una reserva ya completada fuera de la vía de completado
    EditCompleted,
    /// Volver una reserva archivada a su estado de restauración
    Restore,
}

impl BookingAction {
    /// Acción correspondiente a elegir un estado objetivo en una edición
    pub fn for_target_status(status: BookingStatus) -> BookingAction {
        match status {
            BookingStatus::Pending => BookingAction::SetPending,
            BookingStatus::Ongoing => BookingAction::SetOngoing,
            BookingStatus::Cancelled => BookingAction::SetCancelled,
            BookingStatus::Archived => BookingAction::SetArchived,
            BookingStatus::Completed => BookingAction::Complete,
        }
    }
}

lazy_static! {
    /// (rol, acción) → permitido. Lo que no está en la tabla está denegado.
    static ref BOOKING_PERMISSIONS: HashSet<(UserRole, BookingAction)> = {
        let mut table = HashSet::new();

        // Admin: transiciones sin restricción
        for action in [
            BookingAction::SetPending,
            BookingAction::SetOngoing,
            BookingAction::SetCancelled,
            BookingAction::SetArchived,
            BookingAction::Complete,
            BookingAction::EditCompleted,
            BookingAction::Restore,
        ] {
            table.insert((UserRole::Admin, action));
        }

        // Agent: pending / ongoing / cancelled, más la vía de completado
        for action in [
            BookingAction::SetPending,
            BookingAction::SetOngoing,
            BookingAction::SetCancelled,
            BookingAction::Complete,
        ] {
            table.insert((UserRole::Agent, action));
        }

        table
    };
}

/// Servicio de autorización de la consola
pub struct AuthorizationService;

impl AuthorizationService {
    /// Consulta la tabla de permisos de reservas
    pub fn can_perform(role: UserRole, action: BookingAction) -> bool {
        BOOKING_PERMISSIONS.contains(&(role, action))
    }

    /// Verifica si un rol puede gestionar usuarios
    pub fn can_manage_users(role: UserRole) -> bool {
        role.is_admin()
    }

    /// Verifica si un rol puede gestionar empresas y sucursales
    pub fn can_manage_companies(role: UserRole) -> bool {
        role.is_admin()
    }

    /// Verifica si un rol puede archivar vehículos
    pub fn can_archive_vehicles(role: UserRole) -> bool {
        role.is_admin()
    }

    /// Verifica si un rol puede archivar o restaurar clientes
    pub fn can_archive_customers(role: UserRole) -> bool {
        role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_unrestricted_transitions() {
        for action in [
            BookingAction::SetPending,
            BookingAction::SetOngoing,
            BookingAction::SetCancelled,
            BookingAction::SetArchived,
            BookingAction::Complete,
            BookingAction::EditCompleted,
            BookingAction::Restore,
        ] {
            assert!(AuthorizationService::can_perform(UserRole::Admin, action));
        }
    }

    #[test]
    fn test_agent_cannot_archive_restore_or_edit_completed() {
        assert!(!AuthorizationService::can_perform(
            UserRole::Agent,
            BookingAction::SetArchived
        ));
        assert!(!AuthorizationService::can_perform(
            UserRole::Agent,
            BookingAction::Restore
        ));
        assert!(!AuthorizationService::can_perform(
            UserRole::Agent,
            BookingAction::EditCompleted
        ));
    }

    #[test]
    fn test_agent_allowed_statuses() {
        assert!(AuthorizationService::can_perform(UserRole::Agent, BookingAction::SetPending));
        assert!(AuthorizationService::can_perform(UserRole::Agent, BookingAction::SetOngoing));
        assert!(AuthorizationService::can_perform(UserRole::Agent, BookingAction::SetCancelled));
        assert!(AuthorizationService::can_perform(UserRole::Agent, BookingAction::Complete));
    }

    #[test]
    fn test_management_capabilities() {
        assert!(AuthorizationService::can_manage_users(UserRole::Admin));
        assert!(!AuthorizationService::can_manage_users(UserRole::Agent));
        assert!(AuthorizationService::can_manage_companies(UserRole::Admin));
        assert!(!AuthorizationService::can_manage_companies(UserRole::Agent));
    }

    #[test]
    fn test_target_status_maps_to_action() {
        assert_eq!(
            BookingAction::for_target_status(BookingStatus::Completed),
            BookingAction::Complete
        );
        assert_eq!(
            BookingAction::for_target_status(BookingStatus::Archived),
            BookingAction::SetArchived
        );
    }
}
