//! Controller de reservas
//!
//! Orquesta las operaciones HTTP sobre el BookingService; toda la lógica
//! de transiciones y permisos vive en el servicio.

use uuid::Uuid;

use crate::dto::booking_dto::{
    BookingResponse, CompleteBookingRequest, CreateBookingRequest, UpdateBookingRequest,
};
use crate::dto::company_dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::traits::Stores;
use crate::services::booking_service::BookingService;
use crate::utils::errors::AppError;

pub struct BookingController {
    service: BookingService,
}

impl BookingController {
    pub fn new(stores: Stores) -> Self {
        Self {
            service: BookingService::new(stores),
        }
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.service.create(user.role, request).await?;
        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BookingResponse, AppError> {
        let booking = self.service.get(id).await?;
        Ok(BookingResponse::from(booking))
    }

    /// Los agentes ven solo su sucursal; los admins pueden pedir todas.
    pub async fn list(
        &self,
        user: &AuthenticatedUser,
        branch_filter: Option<Uuid>,
    ) -> Result<Vec<BookingResponse>, AppError> {
        let branch = match user.role.is_admin() {
            true => branch_filter,
            false => user.branch_id.or(branch_filter),
        };

        let bookings = self.service.list(branch).await?;
        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.service.update(user.role, id, request).await?;
        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Reserva actualizada exitosamente".to_string(),
        ))
    }

    pub async fn complete(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: CompleteBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.service.complete(user.role, id, request).await?;
        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Reserva completada exitosamente".to_string(),
        ))
    }

    pub async fn archive(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.service.archive(user.role, id).await?;
        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Reserva archivada".to_string(),
        ))
    }

    pub async fn restore(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.service.restore(user.role, id).await?;
        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Reserva restaurada".to_string(),
        ))
    }
}
