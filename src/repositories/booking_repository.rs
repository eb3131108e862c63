//! Repositorio Postgres de reservas

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus};
use crate::repositories::traits::BookingStore;
use crate::utils::errors::AppError;

#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    vehicle_id: Uuid,
    customer_id: Uuid,
    branch_id: Uuid,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    total_price: Decimal,
    status: String,
    start_km: i64,
    end_km: Option<i64>,
    km_driven: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            vehicle_id: row.vehicle_id,
            customer_id: row.customer_id,
            branch_id: row.branch_id,
            start_date: row.start_date,
            end_date: row.end_date,
            total_price: row.total_price,
            status: BookingStatus::from_str(&row.status),
            start_km: row.start_km,
            end_km: row.end_km,
            km_driven: row.km_driven,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingRepository {
    async fn list(&self, branch_id: Option<Uuid>) -> Result<Vec<Booking>, AppError> {
        let rows = match branch_id {
            Some(branch) => {
                sqlx::query_as::<_, BookingRow>(
                    "SELECT * FROM bookings WHERE branch_id = $1 ORDER BY created_at, id",
                )
                .bind(branch)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, BookingRow>("SELECT * FROM bookings ORDER BY created_at, id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let row = sqlx::query_as::<_, BookingRow>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Booking::from))
    }

    async fn save(&self, booking: Booking) -> Result<Booking, AppError> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            INSERT INTO bookings (
                id, vehicle_id, customer_id, branch_id, start_date, end_date,
                total_price, status, start_km, end_km, km_driven,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (id) DO UPDATE SET
                vehicle_id = EXCLUDED.vehicle_id,
                customer_id = EXCLUDED.customer_id,
                branch_id = EXCLUDED.branch_id,
                start_date = EXCLUDED.start_date,
                end_date = EXCLUDED.end_date,
                total_price = EXCLUDED.total_price,
                status = EXCLUDED.status,
                start_km = EXCLUDED.start_km,
                end_km = EXCLUDED.end_km,
                km_driven = EXCLUDED.km_driven,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.vehicle_id)
        .bind(booking.customer_id)
        .bind(booking.branch_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.total_price)
        .bind(booking.status.as_str())
        .bind(booking.start_km)
        .bind(booking.end_km)
        .bind(booking.km_driven)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(Booking::from(row))
    }
}
