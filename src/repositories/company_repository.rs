//! Repositorio Postgres de empresas

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::company::Company;
use crate::utils::errors::AppError;

#[derive(Debug, sqlx::FromRow)]
struct CompanyRow {
    id: Uuid,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Company, AppError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            INSERT INTO companies (id, name, email, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(Company::from(row))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        let row = sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Company::from))
    }

    pub async fn list(&self) -> Result<Vec<Company>, AppError> {
        let rows =
            sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies ORDER BY created_at, id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Company, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empresa no encontrada".to_string()))?;

        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            UPDATE companies
            SET name = $2, email = $3, phone = $4, updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(email.or(current.email))
        .bind(phone.or(current.phone))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Company::from(row))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Empresa no encontrada".to_string()));
        }

        Ok(())
    }
}
