//! Repository trait for bookings.

use crate::domain::entities::{Booking, NewBooking, UpdateBooking};
use crate::domain::scope::OwnerScope;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for owner-scoped bookings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_booking.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persists a new booking.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the passenger or a flight does not exist.
    async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError>;

    /// Finds a booking by id within `scope`.
    async fn find_by_id(&self, id: i64, scope: &OwnerScope) -> Result<Option<Booking>, AppError>;

    /// Lists bookings visible in `scope`, ordered by id.
    async fn list(&self, scope: &OwnerScope) -> Result<Vec<Booking>, AppError>;

    /// Replaces a booking visible in `scope`.
    ///
    /// Returns `Ok(None)` if no such booking is visible.
    async fn update(
        &self,
        id: i64,
        update: UpdateBooking,
        scope: &OwnerScope,
    ) -> Result<Option<Booking>, AppError>;

    /// Deletes a booking visible in `scope`. Returns `false` if nothing was deleted.
    async fn delete(&self, id: i64, scope: &OwnerScope) -> Result<bool, AppError>;

    /// Counts all bookings regardless of owner.
    async fn count(&self) -> Result<i64, AppError>;
}
