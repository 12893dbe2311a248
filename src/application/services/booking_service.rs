//! Booking service shared by the admin and user endpoints.

use std::sync::Arc;

use crate::application::services::not_found;
use crate::domain::entities::{Booking, NewBooking, UpdateBooking};
use crate::domain::repositories::BookingRepository;
use crate::domain::scope::OwnerScope;
use crate::error::AppError;

/// Service for managing bookings.
///
/// The referenced passenger and flights must exist. That is enforced by the
/// store and reported as [`AppError::Conflict`]. Whether the passenger belongs
/// to the same owner as the booking is not checked.
pub struct BookingService {
    repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    /// Lists bookings visible in `scope`.
    pub async fn list_bookings(&self, scope: &OwnerScope) -> Result<Vec<Booking>, AppError> {
        self.repository.list(scope).await
    }

    /// Retrieves a booking visible in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the booking does not exist or
    /// belongs to another owner.
    pub async fn get_booking(&self, id: i64, scope: &OwnerScope) -> Result<Booking, AppError> {
        self.repository
            .find_by_id(id, scope)
            .await?
            .ok_or_else(|| not_found("Booking", id, scope))
    }

    /// Creates a booking owned by `new_booking.created_by`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the passenger or a flight does not exist.
    pub async fn create_booking(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let booking = self.repository.create(new_booking).await?;
        tracing::info!(
            id = booking.id,
            passenger_id = booking.passenger_id,
            flights = ?booking.flight_ids(),
            created_by = %booking.created_by,
            "Booking created"
        );
        Ok(booking)
    }

    /// Replaces a booking visible in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the booking is not visible.
    pub async fn update_booking(
        &self,
        id: i64,
        update: UpdateBooking,
        scope: &OwnerScope,
    ) -> Result<Booking, AppError> {
        let booking = self
            .repository
            .update(id, update, scope)
            .await?
            .ok_or_else(|| not_found("Booking", id, scope))?;
        tracing::info!(id, flights = ?booking.flight_ids(), "Booking updated");
        Ok(booking)
    }

    /// Deletes a booking visible in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the booking is not visible.
    pub async fn delete_booking(&self, id: i64, scope: &OwnerScope) -> Result<(), AppError> {
        if !self.repository.delete(id, scope).await? {
            return Err(not_found("Booking", id, scope));
        }
        tracing::info!(id, "Booking deleted");
        Ok(())
    }

    pub async fn count_bookings(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
