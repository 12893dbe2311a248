//! Repository trait for passengers.

use crate::domain::entities::{NewPassenger, Passenger, UpdatePassenger};
use crate::domain::scope::OwnerScope;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for owner-scoped passengers.
///
/// Every read and write takes an [`OwnerScope`]. With `OwnerScope::Owner`
/// the statement only matches rows whose `created_by` equals the owner.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPassengerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_passenger.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PassengerRepository: Send + Sync {
    /// Persists a new passenger.
    async fn create(&self, new_passenger: NewPassenger) -> Result<Passenger, AppError>;

    /// Finds a passenger by id within `scope`.
    async fn find_by_id(&self, id: i64, scope: &OwnerScope)
    -> Result<Option<Passenger>, AppError>;

    /// Lists passengers visible in `scope`, ordered by id.
    async fn list(&self, scope: &OwnerScope) -> Result<Vec<Passenger>, AppError>;

    /// Replaces a passenger visible in `scope`.
    ///
    /// Returns `Ok(None)` if no such passenger is visible.
    async fn update(
        &self,
        id: i64,
        update: UpdatePassenger,
        scope: &OwnerScope,
    ) -> Result<Option<Passenger>, AppError>;

    /// Deletes a passenger visible in `scope`. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if bookings still reference the passenger.
    async fn delete(&self, id: i64, scope: &OwnerScope) -> Result<bool, AppError>;

    /// Counts all passengers regardless of owner.
    async fn count(&self) -> Result<i64, AppError>;
}
