//! Controlador del ciclo de vida de reservas
//!
//! Gestiona pending → ongoing → {completed, cancelled} → archived, qué
//! campos son mutables en cada transición y con qué rol. Las validaciones
//! fallan antes de cualquier escritura: cada envío se aplica entero o no
//! se aplica. Los efectos sobre el vehículo los delega en FleetSyncService.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{
    CompleteBookingRequest, CreateBookingRequest, UpdateBookingRequest,
};
use crate::models::booking::{Booking, BookingStatus, EditingIntent};
use crate::models::user::UserRole;
use crate::repositories::traits::Stores;
use crate::services::authorization_service::{AuthorizationService, BookingAction};
use crate::services::availability_service::AvailabilityService;
use crate::services::customer_service::{CustomerDetails, CustomerService};
use crate::services::fleet_sync_service::FleetSyncService;
use crate::utils::errors::{validation_error, AppError};

pub struct BookingService {
    stores: Stores,
    availability: AvailabilityService,
    fleet_sync: FleetSyncService,
    customers: CustomerService,
}

impl BookingService {
    pub fn new(stores: Stores) -> Self {
        Self {
            availability: AvailabilityService::new(stores.clone()),
            fleet_sync: FleetSyncService::new(stores.clone()),
            customers: CustomerService::new(stores.clone()),
            stores,
        }
    }

    pub async fn get(&self, id: Uuid) -> Result<Booking, AppError> {
        self.stores
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))
    }

    pub async fn list(&self, branch_id: Option<Uuid>) -> Result<Vec<Booking>, AppError> {
        self.stores.bookings.list(branch_id).await
    }

    /// Crea una reserva. La disponibilidad se revalida aquí, justo antes
    /// de persistir, para cerrar la ventana entre consulta y creación.
    pub async fn create(
        &self,
        role: UserRole,
        request: CreateBookingRequest,
    ) -> Result<Booking, AppError> {
        request.validate()?;

        if request.start_date > request.end_date {
            return Err(validation_error(
                "end_date",
                "La fecha de fin debe ser posterior o igual a la de inicio",
            ));
        }

        let initial_status = request.status.unwrap_or(BookingStatus::Pending);
        if !matches!(initial_status, BookingStatus::Pending | BookingStatus::Ongoing) {
            return Err(validation_error(
                "status",
                "Una reserva nueva solo puede ser pending u ongoing",
            ));
        }
        if !AuthorizationService::can_perform(role, BookingAction::for_target_status(initial_status))
        {
            return Err(AppError::Forbidden(
                "Tu rol no permite asignar ese estado".to_string(),
            ));
        }

        let vehicle = self
            .stores
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if !self
            .availability
            .is_vehicle_available(vehicle.id, request.start_date, request.end_date, None)
            .await?
        {
            return Err(AppError::Conflict(
                "El vehículo no está disponible en ese rango de fechas".to_string(),
            ));
        }

        let customer = match (request.customer_id, request.customer) {
            (Some(id), _) => self
                .stores
                .customers
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?,
            (None, Some(inline)) => {
                self.customers
                    .upsert_by_passport(
                        CustomerDetails {
                            name: inline.name,
                            passport_number: inline.passport_number,
                            visa_number: inline.visa_number,
                            phone: inline.phone,
                            email: inline.email,
                            address: inline.address,
                        },
                        request.branch_id,
                    )
                    .await?
            }
            (None, None) => {
                return Err(validation_error(
                    "customer_id",
                    "Se requiere un cliente existente o sus datos en línea",
                ));
            }
        };

        let total_price = match request.total_price {
            Some(price) => price,
            None => {
                let days = (request.end_date - request.start_date).num_days().max(1);
                Decimal::from(days) * vehicle.price_per_day
            }
        };

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            vehicle_id: vehicle.id,
            customer_id: customer.id,
            branch_id: request.branch_id,
            start_date: request.start_date,
            end_date: request.end_date,
            total_price,
            status: initial_status,
            start_km: vehicle.current_km,
            end_km: None,
            km_driven: None,
            created_at: now,
            updated_at: now,
        };

        let booking = self.stores.bookings.save(booking).await?;

        self.fleet_sync.on_booking_created(&booking).await?;
        self.customers.mark_returning(booking.customer_id).await?;

        Ok(booking)
    }

    /// Actualiza una reserva. Un estado objetivo `completed` se resuelve
    /// por la vía de completado; `archived` queda reservado a admins.
    pub async fn update(
        &self,
        role: UserRole,
        id: Uuid,
        request: UpdateBookingRequest,
    ) -> Result<Booking, AppError> {
        request.validate()?;

        let booking = self.get(id).await?;

        if booking.status == BookingStatus::Completed
            && !AuthorizationService::can_perform(role, BookingAction::EditCompleted)
        {
            return Err(AppError::Forbidden(
                "No puedes modificar una reserva completada".to_string(),
            ));
        }
        if booking.status == BookingStatus::Archived
            && !AuthorizationService::can_perform(role, BookingAction::SetArchived)
        {
            return Err(AppError::Forbidden(
                "No puedes modificar una reserva archivada".to_string(),
            ));
        }

        // El pseudo-estado "completing" solo existe mientras se resuelve
        // este envío; nunca se persiste. Si la resolución falla, el estado
        // guardado en `prior_status` sigue siendo el vigente.
        let intent = match request.status {
            Some(BookingStatus::Completed) if booking.status != BookingStatus::Completed => {
                EditingIntent::Complete {
                    prior_status: booking.status,
                }
            }
            _ => EditingIntent::Update,
        };

        if let EditingIntent::Complete { .. } = intent {
            return self
                .resolve_completion(role, booking, request.end_km, request.total_price)
                .await;
        }

        if let Some(target) = request.status {
            if !AuthorizationService::can_perform(role, BookingAction::for_target_status(target)) {
                return Err(AppError::Forbidden(
                    "Tu rol no permite asignar ese estado".to_string(),
                ));
            }
        }

        let start_date = request.start_date.unwrap_or(booking.start_date);
        let end_date = request.end_date.unwrap_or(booking.end_date);
        if start_date > end_date {
            return Err(validation_error(
                "end_date",
                "La fecha de fin debe ser posterior o igual a la de inicio",
            ));
        }

        let vehicle_id = request.vehicle_id.unwrap_or(booking.vehicle_id);
        let schedule_changed = vehicle_id != booking.vehicle_id
            || start_date != booking.start_date
            || end_date != booking.end_date;

        if schedule_changed {
            if self.stores.vehicles.find_by_id(vehicle_id).await?.is_none() {
                return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
            }
            if !self
                .availability
                .is_vehicle_available(vehicle_id, start_date, end_date, Some(booking.id))
                .await?
            {
                return Err(AppError::Conflict(
                    "El vehículo no está disponible en ese rango de fechas".to_string(),
                ));
            }
        }

        if let Some(customer_id) = request.customer_id {
            if self.stores.customers.find_by_id(customer_id).await?.is_none() {
                return Err(AppError::NotFound("Cliente no encontrado".to_string()));
            }
        }

        let mut updated = booking;
        updated.vehicle_id = vehicle_id;
        updated.start_date = start_date;
        updated.end_date = end_date;
        if let Some(customer_id) = request.customer_id {
            updated.customer_id = customer_id;
        }
        if let Some(price) = request.total_price {
            updated.total_price = price;
        }
        if let Some(status) = request.status {
            // La cancelación no libera el vehículo: puede estar ya
            // reasignado a otra reserva.
            updated.status = status;
        }
        updated.updated_at = Utc::now();

        self.stores.bookings.save(updated).await
    }

    /// Transición ongoing → completed con lectura de odómetro.
    pub async fn complete(
        &self,
        role: UserRole,
        id: Uuid,
        request: CompleteBookingRequest,
    ) -> Result<Booking, AppError> {
        let booking = self.get(id).await?;
        self.resolve_completion(role, booking, request.end_km, request.total_price)
            .await
    }

    async fn resolve_completion(
        &self,
        role: UserRole,
        booking: Booking,
        end_km: Option<i64>,
        total_price: Option<Decimal>,
    ) -> Result<Booking, AppError> {
        if !AuthorizationService::can_perform(role, BookingAction::Complete) {
            return Err(AppError::Forbidden(
                "Tu rol no permite completar reservas".to_string(),
            ));
        }

        if booking.status != BookingStatus::Ongoing {
            return Err(validation_error(
                "status",
                "Solo una reserva en curso puede completarse",
            ));
        }

        let Some(end_km) = end_km else {
            return Err(validation_error(
                "end_km",
                "Se requiere el kilometraje final para completar la reserva",
            ));
        };
        if end_km < booking.start_km {
            return Err(validation_error(
                "end_km",
                "El kilometraje final debe ser mayor o igual al inicial",
            ));
        }

        let mut completed = booking;
        completed.end_km = Some(end_km);
        completed.km_driven = Some(end_km - completed.start_km);
        completed.status = BookingStatus::Completed;
        if let Some(price) = total_price {
            completed.total_price = price;
        }
        completed.updated_at = Utc::now();

        let saved = self.stores.bookings.save(completed).await?;
        self.fleet_sync.on_booking_completed(&saved).await?;

        Ok(saved)
    }

    /// Archiva una reserva. Solo admins; sin efectos sobre el vehículo.
    pub async fn archive(&self, role: UserRole, id: Uuid) -> Result<Booking, AppError> {
        if !AuthorizationService::can_perform(role, BookingAction::SetArchived) {
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador para archivar reservas".to_string(),
            ));
        }

        let mut booking = self.get(id).await?;
        if booking.status == BookingStatus::Archived {
            return Err(AppError::Conflict("La reserva ya está archivada".to_string()));
        }

        booking.status = BookingStatus::Archived;
        booking.updated_at = Utc::now();
        self.stores.bookings.save(booking).await
    }

    /// Restaura una reserva archivada. Política fija: siempre vuelve a
    /// `completed`; el estado previo al archivo no se registra.
    /// TODO: confirmar con producto si la restauración debe recordar el
    /// estado original en lugar de asumir `completed`.
    pub async fn restore(&self, role: UserRole, id: Uuid) -> Result<Booking, AppError> {
        if !AuthorizationService::can_perform(role, BookingAction::Restore) {
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador para restaurar reservas".to_string(),
            ));
        }

        let mut booking = self.get(id).await?;
        if booking.status != BookingStatus::Archived {
            return Err(AppError::Conflict(
                "Solo una reserva archivada puede restaurarse".to_string(),
            ));
        }

        booking.status = BookingStatus::Completed;
        booking.updated_at = Utc::now();
        self.stores.bookings.save(booking).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};

    use crate::models::customer::{Customer, CustomerType};
    use crate::models::vehicle::{BodyType, FuelType, Vehicle, VehicleStatus};
    use crate::repositories::memory::in_memory_stores;

    fn dt(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn mk_vehicle(current_km: i64) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2021,
            color: Some("white".to_string()),
            fuel_type: FuelType::Petrol,
            body_type: BodyType::Sedan,
            status: VehicleStatus::Available,
            price_per_day: Decimal::new(45, 0),
            current_km,
            image_urls: vec![],
            updated_by_branch: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn mk_customer(branch_id: Uuid) -> Customer {
        Customer {
            id: Uuid::new_v4(),
            name: "Amina Hassan".to_string(),
            passport_number: "X1234567".to_string(),
            visa_number: None,
            phone: None,
            email: None,
            address: None,
            branch_id,
            customer_type: CustomerType::New,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_request(
        vehicle_id: Uuid,
        customer_id: Uuid,
        branch_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CreateBookingRequest {
        CreateBookingRequest {
            vehicle_id,
            customer_id: Some(customer_id),
            customer: None,
            branch_id,
            start_date: start,
            end_date: end,
            total_price: None,
            status: None,
        }
    }

    fn empty_update() -> UpdateBookingRequest {
        UpdateBookingRequest {
            vehicle_id: None,
            customer_id: None,
            start_date: None,
            end_date: None,
            total_price: None,
            status: None,
            end_km: None,
        }
    }

    struct Fixture {
        stores: Stores,
        service: BookingService,
        vehicle: Vehicle,
        customer: Customer,
        branch_id: Uuid,
    }

    async fn fixture() -> Fixture {
        let stores = in_memory_stores();
        let branch_id = Uuid::new_v4();
        let vehicle = mk_vehicle(5200);
        let customer = mk_customer(branch_id);
        stores.vehicles.save(vehicle.clone()).await.unwrap();
        stores.customers.save(customer.clone()).await.unwrap();
        Fixture {
            service: BookingService::new(stores.clone()),
            stores,
            vehicle,
            customer,
            branch_id,
        }
    }

    #[tokio::test]
    async fn test_create_snapshots_km_and_syncs_vehicle() {
        let f = fixture().await;
        let booking = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 20),
                    dt(2023, 9, 25),
                ),
            )
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.start_km, 5200);
        // 5 días * 45 = 225
        assert_eq!(booking.total_price, Decimal::new(225, 0));

        let vehicle = f.stores.vehicles.find_by_id(f.vehicle.id).await.unwrap().unwrap();
        assert_eq!(vehicle.status, VehicleStatus::Booked);

        let customer = f.stores.customers.find_by_id(f.customer.id).await.unwrap().unwrap();
        assert_eq!(customer.customer_type, CustomerType::Returning);
    }

    #[tokio::test]
    async fn test_create_rejects_overlapping_interval() {
        // Nunca dos reservas no canceladas solapadas sobre el mismo vehículo
        let f = fixture().await;
        f.service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 20),
                    dt(2023, 9, 25),
                ),
            )
            .await
            .unwrap();

        let result = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 23),
                    dt(2023, 9, 28),
                ),
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(f.stores.bookings.list(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_allows_interval_over_cancelled_booking() {
        let f = fixture().await;
        let first = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 20),
                    dt(2023, 9, 25),
                ),
            )
            .await
            .unwrap();

        let mut cancel = empty_update();
        cancel.status = Some(BookingStatus::Cancelled);
        f.service.update(UserRole::Agent, first.id, cancel).await.unwrap();

        let second = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 23),
                    dt(2023, 9, 28),
                ),
            )
            .await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_inverted_dates_without_mutation() {
        let f = fixture().await;
        let result = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 25),
                    dt(2023, 9, 20),
                ),
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(f.stores.bookings.list(None).await.unwrap().is_empty());
        // El vehículo tampoco cambió
        let vehicle = f.stores.vehicles.find_by_id(f.vehicle.id).await.unwrap().unwrap();
        assert_eq!(vehicle.status, VehicleStatus::Available);
    }

    #[tokio::test]
    async fn test_create_requires_some_customer() {
        let f = fixture().await;
        let mut request = create_request(
            f.vehicle.id,
            f.customer.id,
            f.branch_id,
            dt(2023, 9, 20),
            dt(2023, 9, 25),
        );
        request.customer_id = None;

        let result = f.service.create(UserRole::Agent, request).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(f.stores.bookings.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_with_inline_customer_upserts_by_passport() {
        let f = fixture().await;
        let mut request = create_request(
            f.vehicle.id,
            f.customer.id,
            f.branch_id,
            dt(2023, 9, 20),
            dt(2023, 9, 25),
        );
        request.customer_id = None;
        request.customer = Some(crate::dto::booking_dto::InlineCustomerRequest {
            // Mismo pasaporte que el cliente sembrado: se actualiza en sitio
            name: "Amina H. Hassan".to_string(),
            passport_number: "X1234567".to_string(),
            visa_number: None,
            phone: None,
            email: None,
            address: None,
        });

        let booking = f.service.create(UserRole::Agent, request).await.unwrap();
        assert_eq!(booking.customer_id, f.customer.id);
        assert_eq!(f.stores.customers.list(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_terminal_initial_status() {
        let f = fixture().await;
        let mut request = create_request(
            f.vehicle.id,
            f.customer.id,
            f.branch_id,
            dt(2023, 9, 20),
            dt(2023, 9, 25),
        );
        request.status = Some(BookingStatus::Archived);

        let result = f.service.create(UserRole::Admin, request).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_completion_computes_km_driven_and_syncs_fleet() {
        // start_km 5200 y end_km 5400 dejan km_driven 200, el vehículo
        // en 5400 y de vuelta en available
        let f = fixture().await;
        let mut request = create_request(
            f.vehicle.id,
            f.customer.id,
            f.branch_id,
            dt(2023, 9, 20),
            dt(2023, 9, 25),
        );
        request.status = Some(BookingStatus::Ongoing);
        let booking = f.service.create(UserRole::Agent, request).await.unwrap();

        let completed = f
            .service
            .complete(
                UserRole::Agent,
                booking.id,
                CompleteBookingRequest {
                    end_km: Some(5400),
                    total_price: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(completed.status, BookingStatus::Completed);
        assert_eq!(completed.end_km, Some(5400));
        assert_eq!(completed.km_driven, Some(200));

        let vehicle = f.stores.vehicles.find_by_id(f.vehicle.id).await.unwrap().unwrap();
        assert_eq!(vehicle.current_km, 5400);
        assert_eq!(vehicle.status, VehicleStatus::Available);
    }

    #[tokio::test]
    async fn test_completion_rejects_regressive_end_km() {
        // end_km 5100 por debajo de start_km 5200: error de campo, sin mutación
        let f = fixture().await;
        let mut request = create_request(
            f.vehicle.id,
            f.customer.id,
            f.branch_id,
            dt(2023, 9, 20),
            dt(2023, 9, 25),
        );
        request.status = Some(BookingStatus::Ongoing);
        let booking = f.service.create(UserRole::Agent, request).await.unwrap();

        let result = f
            .service
            .complete(
                UserRole::Agent,
                booking.id,
                CompleteBookingRequest {
                    end_km: Some(5100),
                    total_price: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        let stored = f.stores.bookings.find_by_id(booking.id).await.unwrap().unwrap();
        assert_eq!(stored.status, BookingStatus::Ongoing);
        assert_eq!(stored.end_km, None);
        let vehicle = f.stores.vehicles.find_by_id(f.vehicle.id).await.unwrap().unwrap();
        assert_eq!(vehicle.current_km, 5200);
    }

    #[tokio::test]
    async fn test_completion_requires_end_km() {
        let f = fixture().await;
        let mut request = create_request(
            f.vehicle.id,
            f.customer.id,
            f.branch_id,
            dt(2023, 9, 20),
            dt(2023, 9, 25),
        );
        request.status = Some(BookingStatus::Ongoing);
        let booking = f.service.create(UserRole::Agent, request).await.unwrap();

        let result = f
            .service
            .complete(
                UserRole::Agent,
                booking.id,
                CompleteBookingRequest {
                    end_km: None,
                    total_price: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_completion_only_from_ongoing() {
        let f = fixture().await;
        let booking = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 20),
                    dt(2023, 9, 25),
                ),
            )
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);

        let result = f
            .service
            .complete(
                UserRole::Admin,
                booking.id,
                CompleteBookingRequest {
                    end_km: Some(5400),
                    total_price: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_to_completed_routes_through_completion() {
        let f = fixture().await;
        let mut request = create_request(
            f.vehicle.id,
            f.customer.id,
            f.branch_id,
            dt(2023, 9, 20),
            dt(2023, 9, 25),
        );
        request.status = Some(BookingStatus::Ongoing);
        let booking = f.service.create(UserRole::Agent, request).await.unwrap();

        // Sin end_km la vía de completado rechaza el cambio de estado
        let mut update = empty_update();
        update.status = Some(BookingStatus::Completed);
        let result = f.service.update(UserRole::Admin, booking.id, update).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        // Con end_km el mismo update completa la reserva
        let mut update = empty_update();
        update.status = Some(BookingStatus::Completed);
        update.end_km = Some(5350);
        let completed = f.service.update(UserRole::Admin, booking.id, update).await.unwrap();
        assert_eq!(completed.status, BookingStatus::Completed);
        assert_eq!(completed.km_driven, Some(150));
    }

    #[tokio::test]
    async fn test_agent_cannot_edit_completed_booking() {
        // El agente no toca una reserva
        // completada y el storage queda intacto
        let f = fixture().await;
        let mut request = create_request(
            f.vehicle.id,
            f.customer.id,
            f.branch_id,
            dt(2023, 9, 20),
            dt(2023, 9, 25),
        );
        request.status = Some(BookingStatus::Ongoing);
        let booking = f.service.create(UserRole::Agent, request).await.unwrap();
        f.service
            .complete(
                UserRole::Agent,
                booking.id,
                CompleteBookingRequest {
                    end_km: Some(5400),
                    total_price: None,
                },
            )
            .await
            .unwrap();

        let before = f.stores.bookings.find_by_id(booking.id).await.unwrap().unwrap();

        let mut update = empty_update();
        update.start_date = Some(dt(2023, 10, 1));
        let result = f.service.update(UserRole::Agent, booking.id, update).await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
        let after = f.stores.bookings.find_by_id(booking.id).await.unwrap().unwrap();
        assert_eq!(after.start_date, before.start_date);
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[tokio::test]
    async fn test_admin_can_adjust_completed_booking_price() {
        let f = fixture().await;
        let mut request = create_request(
            f.vehicle.id,
            f.customer.id,
            f.branch_id,
            dt(2023, 9, 20),
            dt(2023, 9, 25),
        );
        request.status = Some(BookingStatus::Ongoing);
        let booking = f.service.create(UserRole::Agent, request).await.unwrap();
        f.service
            .complete(
                UserRole::Agent,
                booking.id,
                CompleteBookingRequest {
                    end_km: Some(5400),
                    total_price: None,
                },
            )
            .await
            .unwrap();

        let mut update = empty_update();
        update.total_price = Some(Decimal::new(300, 0));
        let updated = f.service.update(UserRole::Admin, booking.id, update).await.unwrap();
        assert_eq!(updated.total_price, Decimal::new(300, 0));
    }

    #[tokio::test]
    async fn test_agent_cannot_archive() {
        let f = fixture().await;
        let booking = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 20),
                    dt(2023, 9, 25),
                ),
            )
            .await
            .unwrap();

        assert!(matches!(
            f.service.archive(UserRole::Agent, booking.id).await,
            Err(AppError::Forbidden(_))
        ));

        let mut update = empty_update();
        update.status = Some(BookingStatus::Archived);
        assert!(matches!(
            f.service.update(UserRole::Agent, booking.id, update).await,
            Err(AppError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn test_archive_and_restore_lands_in_completed() {
        let f = fixture().await;
        let booking = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 20),
                    dt(2023, 9, 25),
                ),
            )
            .await
            .unwrap();

        let archived = f.service.archive(UserRole::Admin, booking.id).await.unwrap();
        assert_eq!(archived.status, BookingStatus::Archived);

        // Política fija: la restauración siempre aterriza en completed,
        // aunque la reserva se archivara estando pending
        let restored = f.service.restore(UserRole::Admin, booking.id).await.unwrap();
        assert_eq!(restored.status, BookingStatus::Completed);
    }

    #[tokio::test]
    async fn test_cancel_leaves_vehicle_as_is() {
        // Política documentada: cancelar no devuelve el vehículo a available
        let f = fixture().await;
        let booking = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 20),
                    dt(2023, 9, 25),
                ),
            )
            .await
            .unwrap();

        let mut update = empty_update();
        update.status = Some(BookingStatus::Cancelled);
        f.service.update(UserRole::Agent, booking.id, update).await.unwrap();

        let vehicle = f.stores.vehicles.find_by_id(f.vehicle.id).await.unwrap().unwrap();
        assert_eq!(vehicle.status, VehicleStatus::Booked);
    }

    #[tokio::test]
    async fn test_update_reschedule_rechecks_availability_excluding_self() {
        let f = fixture().await;
        let other_vehicle = mk_vehicle(100);
        f.stores.vehicles.save(other_vehicle.clone()).await.unwrap();

        let first = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 20),
                    dt(2023, 9, 25),
                ),
            )
            .await
            .unwrap();
        let second = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    other_vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 1),
                    dt(2023, 9, 5),
                ),
            )
            .await
            .unwrap();

        // Mover la segunda reserva encima de la primera en el mismo
        // vehículo debe fallar
        let mut onto_first = empty_update();
        onto_first.vehicle_id = Some(f.vehicle.id);
        onto_first.start_date = Some(dt(2023, 9, 22));
        onto_first.end_date = Some(dt(2023, 9, 24));
        assert!(matches!(
            f.service.update(UserRole::Agent, second.id, onto_first).await,
            Err(AppError::Conflict(_))
        ));

        // Ajustar la primera dentro de su propio intervalo es válido:
        // su propia agenda queda excluida del escaneo
        let mut shrink = empty_update();
        shrink.start_date = Some(dt(2023, 9, 21));
        shrink.end_date = Some(dt(2023, 9, 24));
        assert!(f.service.update(UserRole::Agent, first.id, shrink).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at_and_keeps_created_at() {
        let f = fixture().await;
        let booking = f
            .service
            .create(
                UserRole::Agent,
                create_request(
                    f.vehicle.id,
                    f.customer.id,
                    f.branch_id,
                    dt(2023, 9, 20),
                    dt(2023, 9, 25),
                ),
            )
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let mut update = empty_update();
        update.total_price = Some(Decimal::new(250, 0));
        let updated = f.service.update(UserRole::Agent, booking.id, update).await.unwrap();

        assert_eq!(updated.created_at, booking.created_at);
        assert!(updated.updated_at > booking.updated_at);
    }
}
