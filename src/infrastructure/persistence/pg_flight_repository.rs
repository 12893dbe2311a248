//! PostgreSQL implementation of the flight repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Flight, NewFlight, UpdateFlight};
use crate::domain::repositories::FlightRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct FlightRow {
    id: i64,
    airplane_id: i64,
    origin: String,
    destination: String,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    created_by: String,
}

impl From<FlightRow> for Flight {
    fn from(r: FlightRow) -> Self {
        Flight {
            id: r.id,
            airplane_id: r.airplane_id,
            origin: r.origin,
            destination: r.destination,
            departure: r.departure,
            arrival: r.arrival,
            created_by: r.created_by,
        }
    }
}

/// PostgreSQL repository for flights.
///
/// `airplane_id` is a foreign key; inserting or updating with an unknown
/// airplane fails with a conflict.
pub struct PgFlightRepository {
    pool: Arc<PgPool>,
}

impl PgFlightRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlightRepository for PgFlightRepository {
    async fn create(&self, new_flight: NewFlight) -> Result<Flight, AppError> {
        let row = sqlx::query_as::<_, FlightRow>(
            r#"
            INSERT INTO flights (airplane_id, origin, destination, departure, arrival, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, airplane_id, origin, destination, departure, arrival, created_by
            "#,
        )
        .bind(new_flight.airplane_id)
        .bind(new_flight.origin)
        .bind(new_flight.destination)
        .bind(new_flight.departure)
        .bind(new_flight.arrival)
        .bind(new_flight.created_by)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Flight>, AppError> {
        let row = sqlx::query_as::<_, FlightRow>(
            r#"
            SELECT id, airplane_id, origin, destination, departure, arrival, created_by
            FROM flights
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Flight::from))
    }

    async fn list(&self) -> Result<Vec<Flight>, AppError> {
        let rows = sqlx::query_as::<_, FlightRow>(
            r#"
            SELECT id, airplane_id, origin, destination, departure, arrival, created_by
            FROM flights
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn update(&self, id: i64, update: UpdateFlight) -> Result<Option<Flight>, AppError> {
        let row = sqlx::query_as::<_, FlightRow>(
            r#"
            UPDATE flights SET
                airplane_id = $2,
                origin      = $3,
                destination = $4,
                departure   = $5,
                arrival     = $6
            WHERE id = $1
            RETURNING id, airplane_id, origin, destination, departure, arrival, created_by
            "#,
        )
        .bind(id)
        .bind(update.airplane_id)
        .bind(update.origin)
        .bind(update.destination)
        .bind(update.departure)
        .bind(update.arrival)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Flight::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM flights")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
