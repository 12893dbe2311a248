//! PostgreSQL implementation of the booking repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Booking, NewBooking, UpdateBooking};
use crate::domain::repositories::BookingRepository;
use crate::domain::scope::OwnerScope;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    passenger_id: i64,
    origin: String,
    destination: String,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    first_flight_id: i64,
    second_flight_id: Option<i64>,
    third_flight_id: Option<i64>,
    booking_date: NaiveDateTime,
    created_by: String,
}

impl From<BookingRow> for Booking {
    fn from(r: BookingRow) -> Self {
        Booking {
            id: r.id,
            passenger_id: r.passenger_id,
            origin: r.origin,
            destination: r.destination,
            departure: r.departure,
            arrival: r.arrival,
            first_flight_id: r.first_flight_id,
            second_flight_id: r.second_flight_id,
            third_flight_id: r.third_flight_id,
            booking_date: r.booking_date,
            created_by: r.created_by,
        }
    }
}

const BOOKING_COLUMNS: &str = "id, passenger_id, origin, destination, departure, arrival, \
     first_flight_id, second_flight_id, third_flight_id, booking_date, created_by";

/// PostgreSQL repository for bookings.
pub struct PgBookingRepository {
    pool: Arc<PgPool>,
}

impl PgBookingRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let sql = format!(
            r#"
            INSERT INTO bookings (
                passenger_id, origin, destination, departure, arrival,
                first_flight_id, second_flight_id, third_flight_id, booking_date, created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {BOOKING_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(new_booking.passenger_id)
            .bind(new_booking.origin)
            .bind(new_booking.destination)
            .bind(new_booking.departure)
            .bind(new_booking.arrival)
            .bind(new_booking.first_flight_id)
            .bind(new_booking.second_flight_id)
            .bind(new_booking.third_flight_id)
            .bind(new_booking.booking_date)
            .bind(new_booking.created_by)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64, scope: &OwnerScope) -> Result<Option<Booking>, AppError> {
        let sql = format!(
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE id = $1
              AND ($2::TEXT IS NULL OR created_by = $2)
            "#
        );

        let row = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(id)
            .bind(scope.owner_name())
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Booking::from))
    }

    async fn list(&self, scope: &OwnerScope) -> Result<Vec<Booking>, AppError> {
        let sql = format!(
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE ($1::TEXT IS NULL OR created_by = $1)
            ORDER BY id
            "#
        );

        let rows = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(scope.owner_name())
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn update(
        &self,
        id: i64,
        update: UpdateBooking,
        scope: &OwnerScope,
    ) -> Result<Option<Booking>, AppError> {
        let sql = format!(
            r#"
            UPDATE bookings SET
                passenger_id     = $2,
                origin           = $3,
                destination      = $4,
                departure        = $5,
                arrival          = $6,
                first_flight_id  = $7,
                second_flight_id = $8,
                third_flight_id  = $9,
                booking_date     = $10,
                created_by       = COALESCE($11, created_by)
            WHERE id = $1
              AND ($12::TEXT IS NULL OR created_by = $12)
            RETURNING {BOOKING_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(id)
            .bind(update.passenger_id)
            .bind(update.origin)
            .bind(update.destination)
            .bind(update.departure)
            .bind(update.arrival)
            .bind(update.first_flight_id)
            .bind(update.second_flight_id)
            .bind(update.third_flight_id)
            .bind(update.booking_date)
            .bind(update.created_by)
            .bind(scope.owner_name())
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Booking::from))
    }

    async fn delete(&self, id: i64, scope: &OwnerScope) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookings
            WHERE id = $1
              AND ($2::TEXT IS NULL OR created_by = $2)
            "#,
        )
        .bind(id)
        .bind(scope.owner_name())
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
