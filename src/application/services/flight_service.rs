//! Flight schedule service.

use std::sync::Arc;

use crate::application::services::not_found;
use crate::domain::entities::{Flight, NewFlight, UpdateFlight};
use crate::domain::repositories::FlightRepository;
use crate::domain::scope::OwnerScope;
use crate::error::AppError;

/// Service for managing flights.
///
/// Referential integrity between flights and airplanes is enforced by the
/// store; a dangling `airplane_id` surfaces as [`AppError::Conflict`].
pub struct FlightService {
    repository: Arc<dyn FlightRepository>,
}

impl FlightService {
    /// Creates a new flight service.
    pub fn new(repository: Arc<dyn FlightRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_flights(&self) -> Result<Vec<Flight>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a flight by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the flight does not exist.
    pub async fn get_flight(&self, id: i64) -> Result<Flight, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found("Flight", id, &OwnerScope::Any))
    }

    /// Schedules a new flight.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the airplane does not exist.
    pub async fn create_flight(&self, new_flight: NewFlight) -> Result<Flight, AppError> {
        let flight = self.repository.create(new_flight).await?;
        tracing::info!(
            id = flight.id,
            airplane_id = flight.airplane_id,
            "Flight created"
        );
        Ok(flight)
    }

    /// Replaces the mutable fields of a flight.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the flight does not exist.
    pub async fn update_flight(&self, id: i64, update: UpdateFlight) -> Result<Flight, AppError> {
        let flight = self
            .repository
            .update(id, update)
            .await?
            .ok_or_else(|| not_found("Flight", id, &OwnerScope::Any))?;
        tracing::info!(id, "Flight updated");
        Ok(flight)
    }

    /// Deletes a flight.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the flight does not exist.
    /// Returns [`AppError::Conflict`] if bookings still reference it.
    pub async fn delete_flight(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found("Flight", id, &OwnerScope::Any));
        }
        tracing::info!(id, "Flight deleted");
        Ok(())
    }

    pub async fn count_flights(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
