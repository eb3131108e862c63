//! Controller de vehículos

use chrono::Utc;
use uuid::Uuid;

use crate::dto::company_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    AvailabilityQuery, CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::repositories::traits::Stores;
use crate::services::authorization_service::AuthorizationService;
use crate::services::availability_service::AvailabilityService;
use crate::utils::errors::{validation_error, AppError};
use validator::Validate;

pub struct VehicleController {
    stores: Stores,
    availability: AvailabilityService,
}

impl VehicleController {
    pub fn new(stores: Stores) -> Self {
        Self {
            availability: AvailabilityService::new(stores.clone()),
            stores,
        }
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        if request.price_per_day.is_sign_negative() {
            return Err(validation_error(
                "price_per_day",
                "El precio por día no puede ser negativo",
            ));
        }

        let now = Utc::now();
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            make: request.make,
            model: request.model,
            year: request.year,
            color: request.color,
            fuel_type: request.fuel_type,
            body_type: request.body_type,
            status: VehicleStatus::Available,
            price_per_day: request.price_per_day,
            current_km: request.current_km,
            image_urls: request.image_urls.unwrap_or_default(),
            updated_by_branch: user.branch_id,
            created_at: now,
            updated_at: now,
        };

        let vehicle = self.stores.vehicles.save(vehicle).await?;
        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .stores
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.stores.vehicles.list().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    /// Vehículos libres en un intervalo, vía el resolutor de disponibilidad
    pub async fn available(
        &self,
        query: AvailabilityQuery,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        if query.start > query.end {
            return Err(validation_error(
                "end",
                "La fecha de fin debe ser posterior o igual a la de inicio",
            ));
        }

        let vehicles = self
            .availability
            .available_vehicles(query.start, query.end, query.exclude_booking)
            .await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let mut vehicle = self
            .stores
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Reactivar un vehículo archivado es una acción administrativa aparte
        if vehicle.status == VehicleStatus::Archived {
            return Err(AppError::Forbidden(
                "Un vehículo archivado no puede modificarse".to_string(),
            ));
        }

        if let Some(km) = request.current_km {
            // El odómetro solo avanza
            if km < vehicle.current_km {
                return Err(validation_error(
                    "current_km",
                    "El kilometraje no puede retroceder",
                ));
            }
            vehicle.current_km = km;
        }

        if let Some(make) = request.make {
            vehicle.make = make;
        }
        if let Some(model) = request.model {
            vehicle.model = model;
        }
        if let Some(year) = request.year {
            vehicle.year = year;
        }
        if request.color.is_some() {
            vehicle.color = request.color;
        }
        if let Some(fuel_type) = request.fuel_type {
            vehicle.fuel_type = fuel_type;
        }
        if let Some(body_type) = request.body_type {
            vehicle.body_type = body_type;
        }
        if let Some(status) = request.status {
            if status == VehicleStatus::Archived
                && !AuthorizationService::can_archive_vehicles(user.role)
            {
                return Err(AppError::Forbidden(
                    "Se requieren permisos de administrador para archivar vehículos".to_string(),
                ));
            }
            vehicle.status = status;
        }
        if let Some(price) = request.price_per_day {
            if price.is_sign_negative() {
                return Err(validation_error(
                    "price_per_day",
                    "El precio por día no puede ser negativo",
                ));
            }
            vehicle.price_per_day = price;
        }
        if let Some(image_urls) = request.image_urls {
            vehicle.image_urls = image_urls;
        }

        vehicle.updated_by_branch = user.branch_id;
        vehicle.updated_at = Utc::now();

        let vehicle = self.stores.vehicles.save(vehicle).await?;
        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    /// Archivar un vehículo. Irreversible desde la consola de flota.
    pub async fn archive(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        if !AuthorizationService::can_archive_vehicles(user.role) {
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador para archivar vehículos".to_string(),
            ));
        }

        let mut vehicle = self
            .stores
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if vehicle.status == VehicleStatus::Archived {
            return Err(AppError::Conflict("El vehículo ya está archivado".to_string()));
        }

        vehicle.status = VehicleStatus::Archived;
        vehicle.updated_by_branch = user.branch_id;
        vehicle.updated_at = Utc::now();

        let vehicle = self.stores.vehicles.save(vehicle).await?;
        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo archivado".to_string(),
        ))
    }
}
