//! Rutas de clientes

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::customer_controller::CustomerController;
use crate::dto::company_dto::ApiResponse;
use crate::dto::customer_dto::{CustomerFilters, CustomerResponse, SaveCustomerRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", post(save_customer))
        .route("/", get(list_customers))
        .route("/:id", get(get_customer))
        .route("/:id/archive", post(archive_customer))
        .route("/:id/restore", post(restore_customer))
}

/// Alta o actualización: upsert por número de pasaporte
async fn save_customer(
    State(state): State<AppState>,
    Json(request): Json<SaveCustomerRequest>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.stores.clone());
    let response = controller.save(request).await?;
    Ok(Json(response))
}

async fn list_customers(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(filters): Query<CustomerFilters>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.stores.clone());
    let response = controller.list(&user, filters.branch_id).await?;
    Ok(Json(response))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, AppError> {
    let controller = CustomerController::new(state.stores.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn archive_customer(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.stores.clone());
    let response = controller.archive(&user, id).await?;
    Ok(Json(response))
}

async fn restore_customer(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.stores.clone());
    let response = controller.restore(&user, id).await?;
    Ok(Json(response))
}
