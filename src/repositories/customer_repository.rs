//! Repositorio Postgres de clientes

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::customer::{Customer, CustomerType};
use crate::repositories::traits::CustomerStore;
use crate::utils::errors::AppError;

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: Uuid,
    name: String,
    passport_number: String,
    visa_number: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    branch_id: Uuid,
    customer_type: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
            passport_number: row.passport_number,
            visa_number: row.visa_number,
            phone: row.phone,
            email: row.email,
            address: row.address,
            branch_id: row.branch_id,
            customer_type: CustomerType::from_str(&row.customer_type),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerRepository {
    async fn list(&self, branch_id: Option<Uuid>) -> Result<Vec<Customer>, AppError> {
        let rows = match branch_id {
            Some(branch) => {
                sqlx::query_as::<_, CustomerRow>(
                    "SELECT * FROM customers WHERE branch_id = $1 ORDER BY created_at, id",
                )
                .bind(branch)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, CustomerRow>("SELECT * FROM customers ORDER BY created_at, id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Customer::from))
    }

    async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (
                id, name, passport_number, visa_number, phone, email, address,
                branch_id, customer_type, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                passport_number = EXCLUDED.passport_number,
                visa_number = EXCLUDED.visa_number,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                address = EXCLUDED.address,
                branch_id = EXCLUDED.branch_id,
                customer_type = EXCLUDED.customer_type,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.passport_number)
        .bind(&customer.visa_number)
        .bind(&customer.phone)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(customer.branch_id)
        .bind(customer.customer_type.as_str())
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(Customer::from(row))
    }
}
