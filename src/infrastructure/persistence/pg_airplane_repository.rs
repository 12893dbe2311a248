//! PostgreSQL implementation of the airplane repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Airplane, NewAirplane, UpdateAirplane};
use crate::domain::repositories::AirplaneRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct AirplaneRow {
    id: i64,
    brand: String,
    model: String,
    construction_year: i32,
    airline: String,
    seat_capacity: i32,
    created_by: String,
}

impl From<AirplaneRow> for Airplane {
    fn from(r: AirplaneRow) -> Self {
        Airplane {
            id: r.id,
            brand: r.brand,
            model: r.model,
            construction_year: r.construction_year,
            airline: r.airline,
            seat_capacity: r.seat_capacity,
            created_by: r.created_by,
        }
    }
}

/// PostgreSQL repository for airplanes.
pub struct PgAirplaneRepository {
    pool: Arc<PgPool>,
}

impl PgAirplaneRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AirplaneRepository for PgAirplaneRepository {
    async fn create(&self, new_airplane: NewAirplane) -> Result<Airplane, AppError> {
        let row = sqlx::query_as::<_, AirplaneRow>(
            r#"
            INSERT INTO airplanes (brand, model, construction_year, airline, seat_capacity, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, brand, model, construction_year, airline, seat_capacity, created_by
            "#,
        )
        .bind(new_airplane.brand)
        .bind(new_airplane.model)
        .bind(new_airplane.construction_year)
        .bind(new_airplane.airline)
        .bind(new_airplane.seat_capacity)
        .bind(new_airplane.created_by)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Airplane>, AppError> {
        let row = sqlx::query_as::<_, AirplaneRow>(
            r#"
            SELECT id, brand, model, construction_year, airline, seat_capacity, created_by
            FROM airplanes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Airplane::from))
    }

    async fn list(&self) -> Result<Vec<Airplane>, AppError> {
        let rows = sqlx::query_as::<_, AirplaneRow>(
            r#"
            SELECT id, brand, model, construction_year, airline, seat_capacity, created_by
            FROM airplanes
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Airplane::from).collect())
    }

    async fn update(
        &self,
        id: i64,
        update: UpdateAirplane,
    ) -> Result<Option<Airplane>, AppError> {
        // created_by is never rewritten
        let row = sqlx::query_as::<_, AirplaneRow>(
            r#"
            UPDATE airplanes SET
                brand             = $2,
                model             = $3,
                construction_year = $4,
                airline           = $5,
                seat_capacity     = $6
            WHERE id = $1
            RETURNING id, brand, model, construction_year, airline, seat_capacity, created_by
            "#,
        )
        .bind(id)
        .bind(update.brand)
        .bind(update.model)
        .bind(update.construction_year)
        .bind(update.airline)
        .bind(update.seat_capacity)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Airplane::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM airplanes WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM airplanes")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
