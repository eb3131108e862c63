//! Repositorio Postgres de sucursales

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::branch::Branch;
use crate::utils::errors::AppError;

#[derive(Debug, sqlx::FromRow)]
struct BranchRow {
    id: Uuid,
    company_id: Uuid,
    name: String,
    address: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BranchRow> for Branch {
    fn from(row: BranchRow) -> Self {
        Branch {
            id: row.id,
            company_id: row.company_id,
            name: row.name,
            address: row.address,
            phone: row.phone,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct BranchRepository {
    pool: PgPool,
}

impl BranchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        name: String,
        address: Option<String>,
        phone: Option<String>,
    ) -> Result<Branch, AppError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, BranchRow>(
            r#"
            INSERT INTO branches (id, company_id, name, address, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(name)
        .bind(address)
        .bind(phone)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(Branch::from(row))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Branch>, AppError> {
        let row = sqlx::query_as::<_, BranchRow>("SELECT * FROM branches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Branch::from))
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Branch>, AppError> {
        let rows = sqlx::query_as::<_, BranchRow>(
            "SELECT * FROM branches WHERE company_id = $1 ORDER BY created_at, id",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Branch::from).collect())
    }

    pub async fn list(&self) -> Result<Vec<Branch>, AppError> {
        let rows = sqlx::query_as::<_, BranchRow>("SELECT * FROM branches ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Branch::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        address: Option<String>,
        phone: Option<String>,
    ) -> Result<Branch, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sucursal no encontrada".to_string()))?;

        let row = sqlx::query_as::<_, BranchRow>(
            r#"
            UPDATE branches
            SET name = $2, address = $3, phone = $4, updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(address.or(current.address))
        .bind(phone.or(current.phone))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Branch::from(row))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Sucursal no encontrada".to_string()));
        }

        Ok(())
    }
}
