//! Rutas de sucursales

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::branch_controller::BranchController;
use crate::dto::branch_dto::{BranchResponse, CreateBranchRequest, UpdateBranchRequest};
use crate::dto::company_dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct BranchFilters {
    company_id: Option<Uuid>,
}

pub fn create_branch_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_branch))
        .route("/", get(list_branches))
        .route("/:id", get(get_branch))
        .route("/:id", put(update_branch))
        .route("/:id", delete(delete_branch))
}

async fn create_branch(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateBranchRequest>,
) -> Result<Json<ApiResponse<BranchResponse>>, AppError> {
    let controller = BranchController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok(Json(response))
}

async fn list_branches(
    State(state): State<AppState>,
    Query(filters): Query<BranchFilters>,
) -> Result<Json<Vec<BranchResponse>>, AppError> {
    let controller = BranchController::new(state.pool.clone());
    let response = controller.list(filters.company_id).await?;
    Ok(Json(response))
}

async fn get_branch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BranchResponse>, AppError> {
    let controller = BranchController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_branch(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBranchRequest>,
) -> Result<Json<ApiResponse<BranchResponse>>, AppError> {
    let controller = BranchController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_branch(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = BranchController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
