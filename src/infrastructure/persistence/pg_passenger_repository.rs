//! PostgreSQL implementation of the passenger repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPassenger, Passenger, UpdatePassenger};
use crate::domain::repositories::PassengerRepository;
use crate::domain::scope::OwnerScope;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct PassengerRow {
    id: i64,
    lastname: String,
    firstname: String,
    age: i32,
    nationality: String,
    created_by: String,
}

impl From<PassengerRow> for Passenger {
    fn from(r: PassengerRow) -> Self {
        Passenger {
            id: r.id,
            lastname: r.lastname,
            firstname: r.firstname,
            age: r.age,
            nationality: r.nationality,
            created_by: r.created_by,
        }
    }
}

/// PostgreSQL repository for passengers.
///
/// Every statement filters on the owner bound from [`OwnerScope`], so a
/// passenger of another user is indistinguishable from a missing one.
pub struct PgPassengerRepository {
    pool: Arc<PgPool>,
}

impl PgPassengerRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassengerRepository for PgPassengerRepository {
    async fn create(&self, new_passenger: NewPassenger) -> Result<Passenger, AppError> {
        let row = sqlx::query_as::<_, PassengerRow>(
            r#"
            INSERT INTO passengers (lastname, firstname, age, nationality, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, lastname, firstname, age, nationality, created_by
            "#,
        )
        .bind(new_passenger.lastname)
        .bind(new_passenger.firstname)
        .bind(new_passenger.age)
        .bind(new_passenger.nationality)
        .bind(new_passenger.created_by)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: i64,
        scope: &OwnerScope,
    ) -> Result<Option<Passenger>, AppError> {
        let row = sqlx::query_as::<_, PassengerRow>(
            r#"
            SELECT id, lastname, firstname, age, nationality, created_by
            FROM passengers
            WHERE id = $1
              AND ($2::TEXT IS NULL OR created_by = $2)
            "#,
        )
        .bind(id)
        .bind(scope.owner_name())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Passenger::from))
    }

    async fn list(&self, scope: &OwnerScope) -> Result<Vec<Passenger>, AppError> {
        let rows = sqlx::query_as::<_, PassengerRow>(
            r#"
            SELECT id, lastname, firstname, age, nationality, created_by
            FROM passengers
            WHERE ($1::TEXT IS NULL OR created_by = $1)
            ORDER BY id
            "#,
        )
        .bind(scope.owner_name())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Passenger::from).collect())
    }

    async fn update(
        &self,
        id: i64,
        update: UpdatePassenger,
        scope: &OwnerScope,
    ) -> Result<Option<Passenger>, AppError> {
        let row = sqlx::query_as::<_, PassengerRow>(
            r#"
            UPDATE passengers SET
                lastname    = $2,
                firstname   = $3,
                age         = $4,
                nationality = $5,
                created_by  = COALESCE($6, created_by)
            WHERE id = $1
              AND ($7::TEXT IS NULL OR created_by = $7)
            RETURNING id, lastname, firstname, age, nationality, created_by
            "#,
        )
        .bind(id)
        .bind(update.lastname)
        .bind(update.firstname)
        .bind(update.age)
        .bind(update.nationality)
        .bind(update.created_by)
        .bind(scope.owner_name())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Passenger::from))
    }

    async fn delete(&self, id: i64, scope: &OwnerScope) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM passengers
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
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM passengers")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
