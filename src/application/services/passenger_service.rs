//! Passenger service shared by the admin and user endpoints.

use std::sync::Arc;

use crate::application::services::not_found;
use crate::domain::entities::{NewPassenger, Passenger, UpdatePassenger};
use crate::domain::repositories::PassengerRepository;
use crate::domain::scope::OwnerScope;
use crate::error::AppError;

/// Service for managing passengers.
///
/// Admin flows call it with [`OwnerScope::Any`], user flows with the caller's
/// [`OwnerScope::Owner`]. A passenger outside the scope is reported as not
/// found.
pub struct PassengerService {
    repository: Arc<dyn PassengerRepository>,
}

impl PassengerService {
    pub fn new(repository: Arc<dyn PassengerRepository>) -> Self {
        Self { repository }
    }

    /// Lists passengers visible in `scope`.
    pub async fn list_passengers(&self, scope: &OwnerScope) -> Result<Vec<Passenger>, AppError> {
        self.repository.list(scope).await
    }

    /// Retrieves a passenger visible in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the passenger does not exist or
    /// belongs to another owner.
    pub async fn get_passenger(&self, id: i64, scope: &OwnerScope) -> Result<Passenger, AppError> {
        self.repository
            .find_by_id(id, scope)
            .await?
            .ok_or_else(|| not_found("Passenger", id, scope))
    }

    /// Registers a passenger owned by `new_passenger.created_by`.
    pub async fn create_passenger(
        &self,
        new_passenger: NewPassenger,
    ) -> Result<Passenger, AppError> {
        let passenger = self.repository.create(new_passenger).await?;
        tracing::info!(
            id = passenger.id,
            created_by = %passenger.created_by,
            "Passenger created"
        );
        Ok(passenger)
    }

    /// Replaces a passenger visible in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the passenger is not visible.
    pub async fn update_passenger(
        &self,
        id: i64,
        update: UpdatePassenger,
        scope: &OwnerScope,
    ) -> Result<Passenger, AppError> {
        let passenger = self
            .repository
            .update(id, update, scope)
            .await?
            .ok_or_else(|| not_found("Passenger", id, scope))?;
        tracing::info!(id, created_by = %passenger.created_by, "Passenger updated");
        Ok(passenger)
    }

    /// Deletes a passenger visible in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the passenger is not visible.
    /// Returns [`AppError::Conflict`] if bookings still reference it.
    pub async fn delete_passenger(&self, id: i64, scope: &OwnerScope) -> Result<(), AppError> {
        if !self.repository.delete(id, scope).await? {
            return Err(not_found("Passenger", id, scope));
        }
        tracing::info!(id, "Passenger deleted");
        Ok(())
    }

    pub async fn count_passengers(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
