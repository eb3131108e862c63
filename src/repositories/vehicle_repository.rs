//! Repositorio Postgres de vehículos

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{BodyType, FuelType, Vehicle, VehicleStatus};
use crate::repositories::traits::VehicleStore;
use crate::utils::errors::AppError;

// Fila tal cual viene del schema; los enums viajan como texto
#[derive(Debug, sqlx::FromRow)]
struct VehicleRow {
    id: Uuid,
    make: String,
    model: String,
    year: i32,
    color: Option<String>,
    fuel_type: String,
    body_type: String,
    status: String,
    price_per_day: Decimal,
    current_km: i64,
    image_urls: Vec<String>,
    updated_by_branch: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle {
            id: row.id,
            make: row.make,
            model: row.model,
            year: row.year,
            color: row.color,
            fuel_type: FuelType::from_str(&row.fuel_type),
            body_type: BodyType::from_str(&row.body_type),
            status: VehicleStatus::from_str(&row.status),
            price_per_day: row.price_per_day,
            current_km: row.current_km,
            image_urls: row.image_urls,
            updated_by_branch: row.updated_by_branch,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleStore for PgVehicleRepository {
    async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        // Orden estable: mismos datos, mismo orden de salida
        let rows = sqlx::query_as::<_, VehicleRow>(
            "SELECT * FROM vehicles ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Vehicle::from))
    }

    async fn save(&self, vehicle: Vehicle) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            INSERT INTO vehicles (
                id, make, model, year, color, fuel_type, body_type, status,
                price_per_day, current_km, image_urls, updated_by_branch,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (id) DO UPDATE SET
                make = EXCLUDED.make,
                model = EXCLUDED.model,
                year = EXCLUDED.year,
                color = EXCLUDED.color,
                fuel_type = EXCLUDED.fuel_type,
                body_type = EXCLUDED.body_type,
                status = EXCLUDED.status,
                price_per_day = EXCLUDED.price_per_day,
                current_km = EXCLUDED.current_km,
                image_urls = EXCLUDED.image_urls,
                updated_by_branch = EXCLUDED.updated_by_branch,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(vehicle.id)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.color)
        .bind(vehicle.fuel_type.as_str())
        .bind(vehicle.body_type.as_str())
        .bind(vehicle.status.as_str())
        .bind(vehicle.price_per_day)
        .bind(vehicle.current_km)
        .bind(&vehicle.image_urls)
        .bind(vehicle.updated_by_branch)
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(Vehicle::from(row))
    }
}
