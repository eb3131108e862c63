//! Servicio de clientes
//!
//! El pasaporte es la clave de negocio: si ya existe un cliente no
//! archivado con el mismo pasaporte, la escritura actualiza ese registro
//! en vez de crear un duplicado.

use chrono::Utc;
use uuid::Uuid;

use crate::models::customer::{Customer, CustomerType};
use crate::models::user::UserRole;
use crate::repositories::traits::Stores;
use crate::services::authorization_service::AuthorizationService;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::validate_passport;

/// Datos de alta o actualización de un cliente
#[derive(Debug, Clone)]
pub struct CustomerDetails {
    pub name: String,
    pub passport_number: String,
    pub visa_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

pub struct CustomerService {
    stores: Stores,
}

impl CustomerService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Upsert por pasaporte contra los clientes no archivados.
    pub async fn upsert_by_passport(
        &self,
        details: CustomerDetails,
        branch_id: Uuid,
    ) -> Result<Customer, AppError> {
        if details.name.trim().is_empty() {
            return Err(validation_error("name", "El nombre es requerido"));
        }
        if validate_passport(&details.passport_number).is_err() {
            return Err(validation_error("passport_number", "Número de pasaporte inválido"));
        }

        let customers = self.stores.customers.list(None).await?;
        let existing = customers
            .into_iter()
            .find(|c| !c.is_archived() && c.passport_number == details.passport_number);

        let now = Utc::now();
        let customer = match existing {
            Some(mut customer) => {
                customer.name = details.name;
                customer.visa_number = details.visa_number.or(customer.visa_number);
                customer.phone = details.phone.or(customer.phone);
                customer.email = details.email.or(customer.email);
                customer.address = details.address.or(customer.address);
                customer.updated_at = now;
                customer
            }
            None => Customer {
                id: Uuid::new_v4(),
                name: details.name,
                passport_number: details.passport_number,
                visa_number: details.visa_number,
                phone: details.phone,
                email: details.email,
                address: details.address,
                branch_id,
                customer_type: CustomerType::New,
                created_at: now,
                updated_at: now,
            },
        };

        self.stores.customers.save(customer).await
    }

    /// Marca un cliente como recurrente al quedar ligado a una reserva.
    pub async fn mark_returning(&self, customer_id: Uuid) -> Result<(), AppError> {
        if let Some(mut customer) = self.stores.customers.find_by_id(customer_id).await? {
            if customer.customer_type == CustomerType::New {
                customer.customer_type = CustomerType::Returning;
                customer.updated_at = Utc::now();
                self.stores.customers.save(customer).await?;
            }
        }
        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Result<Customer, AppError> {
        self.stores
            .customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))
    }

    pub async fn list(&self, branch_id: Option<Uuid>) -> Result<Vec<Customer>, AppError> {
        self.stores.customers.list(branch_id).await
    }

    /// Archiva un cliente. Solo administradores.
    pub async fn archive(&self, role: UserRole, id: Uuid) -> Result<Customer, AppError> {
        if !AuthorizationService::can_archive_customers(role) {
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador para archivar clientes".to_string(),
            ));
        }

        let mut customer = self.get(id).await?;
        customer.customer_type = CustomerType::Archived;
        customer.updated_at = Utc::now();
        self.stores.customers.save(customer).await
    }

    /// Restaura un cliente archivado; el tipo se reinicia a `new` y se
    /// vuelve a ganar `returning` con su siguiente reserva.
    pub async fn restore(&self, role: UserRole, id: Uuid) -> Result<Customer, AppError> {
        if !AuthorizationService::can_archive_customers(role) {
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador para restaurar clientes".to_string(),
            ));
        }

        let mut customer = self.get(id).await?;
        if !customer.is_archived() {
            return Err(AppError::Conflict("El cliente no está archivado".to_string()));
        }
        customer.customer_type = CustomerType::New;
        customer.updated_at = Utc::now();
        self.stores.customers.save(customer).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::in_memory_stores;

    fn details(passport: &str) -> CustomerDetails {
        CustomerDetails {
            name: "Amina Hassan".to_string(),
            passport_number: passport.to_string(),
            visa_number: None,
            phone: Some("0501234567".to_string()),
            email: None,
            address: None,
        }
    }

    #[tokio::test]
    async fn test_upsert_updates_existing_passport_in_place() {
        let stores = in_memory_stores();
        let service = CustomerService::new(stores.clone());
        let branch = Uuid::new_v4();

        let first = service.upsert_by_passport(details("X1234567"), branch).await.unwrap();

        let mut second = details("X1234567");
        second.name = "Amina H. Hassan".to_string();
        second.email = Some("amina@example.com".to_string());
        let updated = service.upsert_by_passport(second, branch).await.unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.name, "Amina H. Hassan");
        assert_eq!(updated.email.as_deref(), Some("amina@example.com"));
        // Sigue habiendo un solo cliente
        assert_eq!(stores.customers.list(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_ignores_archived_customers() {
        let stores = in_memory_stores();
        let service = CustomerService::new(stores.clone());
        let branch = Uuid::new_v4();

        let first = service.upsert_by_passport(details("X1234567"), branch).await.unwrap();
        service.archive(UserRole::Admin, first.id).await.unwrap();

        let second = service.upsert_by_passport(details("X1234567"), branch).await.unwrap();
        assert_ne!(second.id, first.id);
        assert_eq!(stores.customers.list(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_upsert_rejects_invalid_passport() {
        let stores = in_memory_stores();
        let service = CustomerService::new(stores.clone());

        let result = service.upsert_by_passport(details("X1"), Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(stores.customers.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mark_returning_flips_new_once() {
        let stores = in_memory_stores();
        let service = CustomerService::new(stores.clone());

        let customer = service
            .upsert_by_passport(details("X1234567"), Uuid::new_v4())
            .await
            .unwrap();
        assert_eq!(customer.customer_type, CustomerType::New);

        service.mark_returning(customer.id).await.unwrap();
        let saved = service.get(customer.id).await.unwrap();
        assert_eq!(saved.customer_type, CustomerType::Returning);
    }

    #[tokio::test]
    async fn test_archive_requires_admin_and_restore_resets_type() {
        let stores = in_memory_stores();
        let service = CustomerService::new(stores.clone());

        let customer = service
            .upsert_by_passport(details("X1234567"), Uuid::new_v4())
            .await
            .unwrap();

        assert!(matches!(
            service.archive(UserRole::Agent, customer.id).await,
            Err(AppError::Forbidden(_))
        ));

        service.archive(UserRole::Admin, customer.id).await.unwrap();
        let archived = service.get(customer.id).await.unwrap();
        assert!(archived.is_archived());

        let restored = service.restore(UserRole::Admin, customer.id).await.unwrap();
        assert_eq!(restored.customer_type, CustomerType::New);
    }
}
