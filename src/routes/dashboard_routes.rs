//! Rutas del dashboard

use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::DashboardSummary;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct DashboardFilters {
    branch_id: Option<Uuid>,
}

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(dashboard_summary))
}

async fn dashboard_summary(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(filters): Query<DashboardFilters>,
) -> Result<Json<DashboardSummary>, AppError> {
    let controller = DashboardController::new(state.stores.clone());
    let response = controller.summary(&user, filters.branch_id).await?;
    Ok(Json(response))
}
