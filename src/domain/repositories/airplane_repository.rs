//! Repository trait for airplanes.

use crate::domain::entities::{Airplane, NewAirplane, UpdateAirplane};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the airplane catalogue.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAirplaneRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AirplaneRepository: Send + Sync {
    /// Persists a new airplane and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_airplane: NewAirplane) -> Result<Airplane, AppError>;

    /// Finds an airplane by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Airplane>, AppError>;

    /// Lists all airplanes ordered by id.
    async fn list(&self) -> Result<Vec<Airplane>, AppError>;

    /// Replaces the mutable fields of an airplane.
    ///
    /// Returns `Ok(None)` if no airplane has this id.
    async fn update(&self, id: i64, update: UpdateAirplane)
    -> Result<Option<Airplane>, AppError>;

    /// Deletes an airplane. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if flights still reference the airplane.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all airplanes.
    async fn count(&self) -> Result<i64, AppError>;
}
