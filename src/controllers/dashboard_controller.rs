//! Controller del dashboard

use uuid::Uuid;

use crate::dto::dashboard_dto::DashboardSummary;
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::traits::Stores;
use crate::services::dashboard_service::DashboardService;
use crate::utils::errors::AppError;

pub struct DashboardController {
    service: DashboardService,
}

impl DashboardController {
    pub fn new(stores: Stores) -> Self {
        Self {
            service: DashboardService::new(stores),
        }
    }

    /// Resumen agregado; los agentes ven su sucursal, los admins todo
    pub async fn summary(
        &self,
        user: &AuthenticatedUser,
        branch_filter: Option<Uuid>,
    ) -> Result<DashboardSummary, AppError> {
        let branch = match user.role.is_admin() {
            true => branch_filter,
            false => user.branch_id.or(branch_filter),
        };

        self.service.summary(branch).await
    }
}
