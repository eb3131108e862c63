//! Rutas de empresas

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::company_controller::CompanyController;
use crate::dto::company_dto::{
    ApiResponse, CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_company))
        .route("/", get(list_companies))
        .route("/:id", get(get_company))
        .route("/:id", put(update_company))
        .route("/:id", delete(delete_company))
}

async fn create_company(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok(Json(response))
}

async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_company(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_company(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
