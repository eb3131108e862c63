//! Servicio de dashboard
//!
//! Calcula las estadísticas agregadas de la consola: conteos por estado,
//! ingresos de reservas completadas, kilómetros recorridos y reservas por
//! mes. Solo lee las colecciones.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::dto::dashboard_dto::{
    BookingStats, CustomerStats, DashboardSummary, FleetStats, MonthlyBookings,
};
use crate::models::booking::BookingStatus;
use crate::models::customer::CustomerType;
use crate::models::vehicle::VehicleStatus;
use crate::repositories::traits::Stores;
use crate::utils::errors::AppError;

pub struct DashboardService {
    stores: Stores,
}

impl DashboardService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    pub async fn summary(&self, branch_id: Option<Uuid>) -> Result<DashboardSummary, AppError> {
        let vehicles = self.stores.vehicles.list().await?;
        let bookings = self.stores.bookings.list(branch_id).await?;
        let customers = self.stores.customers.list(branch_id).await?;

        let mut fleet = FleetStats::default();
        fleet.total = vehicles.len() as i64;
        for vehicle in &vehicles {
            match vehicle.status {
                VehicleStatus::Available => fleet.available += 1,
                VehicleStatus::Booked => fleet.booked += 1,
                VehicleStatus::Maintenance => fleet.maintenance += 1,
                VehicleStatus::Archived => fleet.archived += 1,
            }
        }

        let mut stats = BookingStats::default();
        stats.total = bookings.len() as i64;
        let mut revenue_completed = Decimal::ZERO;
        let mut total_km_driven: i64 = 0;
        let mut per_month: BTreeMap<String, i64> = BTreeMap::new();

        for booking in &bookings {
            match booking.status {
                BookingStatus::Pending => stats.pending += 1,
                BookingStatus::Ongoing => stats.ongoing += 1,
                BookingStatus::Completed => stats.completed += 1,
                BookingStatus::Cancelled => stats.cancelled += 1,
                BookingStatus::Archived => stats.archived += 1,
            }
            if booking.status == BookingStatus::Completed {
                revenue_completed += booking.total_price;
                total_km_driven += booking.km_driven.unwrap_or(0);
            }
            *per_month
                .entry(booking.start_date.format("%Y-%m").to_string())
                .or_insert(0) += 1;
        }

        let mut customer_stats = CustomerStats::default();
        customer_stats.total = customers.len() as i64;
        for customer in &customers {
            match customer.customer_type {
                CustomerType::New => customer_stats.new += 1,
                CustomerType::Returning => customer_stats.returning += 1,
                CustomerType::Archived => customer_stats.archived += 1,
            }
        }

        Ok(DashboardSummary {
            fleet,
            bookings: stats,
            customers: customer_stats,
            revenue_completed,
            total_km_driven,
            bookings_per_month: per_month
                .into_iter()
                .map(|(month, count)| MonthlyBookings { month, count })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    use crate::models::booking::Booking;
    use crate::models::vehicle::{BodyType, FuelType, Vehicle};
    use crate::repositories::memory::in_memory_stores;

    fn dt(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn mk_vehicle(status: VehicleStatus) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            make: "Kia".to_string(),
            model: "Picanto".to_string(),
            year: 2022,
            color: None,
            fuel_type: FuelType::Petrol,
            body_type: BodyType::Hatchback,
            status,
            price_per_day: Decimal::new(30, 0),
            current_km: 1000,
            image_urls: vec![],
            updated_by_branch: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn mk_booking(status: BookingStatus, start: DateTime<Utc>, price: i64, km: Option<i64>) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
            start_date: start,
            end_date: start,
            total_price: Decimal::new(price, 0),
            status,
            start_km: 0,
            end_km: km,
            km_driven: km,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_summary_aggregates_counts_revenue_and_months() {
        let stores = in_memory_stores();
        stores.vehicles.save(mk_vehicle(VehicleStatus::Available)).await.unwrap();
        stores.vehicles.save(mk_vehicle(VehicleStatus::Booked)).await.unwrap();

        stores
            .bookings
            .save(mk_booking(BookingStatus::Completed, dt(2023, 9, 2), 225, Some(200)))
            .await
            .unwrap();
        stores
            .bookings
            .save(mk_booking(BookingStatus::Completed, dt(2023, 9, 12), 100, Some(50)))
            .await
            .unwrap();
        stores
            .bookings
            .save(mk_booking(BookingStatus::Cancelled, dt(2023, 10, 1), 80, None))
            .await
            .unwrap();

        let service = DashboardService::new(stores);
        let summary = service.summary(None).await.unwrap();

        assert_eq!(summary.fleet.total, 2);
        assert_eq!(summary.fleet.available, 1);
        assert_eq!(summary.fleet.booked, 1);

        assert_eq!(summary.bookings.total, 3);
        assert_eq!(summary.bookings.completed, 2);
        assert_eq!(summary.bookings.cancelled, 1);

        // Los ingresos y km solo cuentan reservas completadas
        assert_eq!(summary.revenue_completed, Decimal::new(325, 0));
        assert_eq!(summary.total_km_driven, 250);

        assert_eq!(summary.bookings_per_month.len(), 2);
        assert_eq!(summary.bookings_per_month[0].month, "2023-09");
        assert_eq!(summary.bookings_per_month[0].count, 2);
        assert_eq!(summary.bookings_per_month[1].month, "2023-10");
        assert_eq!(summary.bookings_per_month[1].count, 1);
    }
}
