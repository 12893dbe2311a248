//! Repository trait for flights.

use crate::domain::entities::{Flight, NewFlight, UpdateFlight};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the flight schedule.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFlightRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Persists a new flight.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the referenced airplane does not exist.
    async fn create(&self, new_flight: NewFlight) -> Result<Flight, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Flight>, AppError>;

    /// Lists all flights ordered by id.
    async fn list(&self) -> Result<Vec<Flight>, AppError>;

    /// Replaces the mutable fields of a flight.
    ///
    /// Returns `Ok(None)` if no flight has this id.
    async fn update(&self, id: i64, update: UpdateFlight) -> Result<Option<Flight>, AppError>;

    /// Deletes a flight. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if bookings still reference the flight.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
