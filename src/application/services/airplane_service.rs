//! Airplane catalogue service.

use std::sync::Arc;

use crate::application::services::not_found;
use crate::domain::entities::{Airplane, NewAirplane, UpdateAirplane};
use crate::domain::repositories::AirplaneRepository;
use crate::domain::scope::OwnerScope;
use crate::error::AppError;

/// Service for managing airplanes.
///
/// Airplanes are a shared catalogue maintained by administrators, so no
/// ownership filter applies.
pub struct AirplaneService {
    repository: Arc<dyn AirplaneRepository>,
}

impl AirplaneService {
    /// Creates a new airplane service.
    pub fn new(repository: Arc<dyn AirplaneRepository>) -> Self {
        Self { repository }
    }

    /// Lists every airplane.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_airplanes(&self) -> Result<Vec<Airplane>, AppError> {
        self.repository.list().await
    }

    /// Retrieves an airplane by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airplane does not exist.
    pub async fn get_airplane(&self, id: i64) -> Result<Airplane, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found("Airplane", id, &OwnerScope::Any))
    }

    /// Registers a new airplane.
    pub async fn create_airplane(&self, new_airplane: NewAirplane) -> Result<Airplane, AppError> {
        let airplane = self.repository.create(new_airplane).await?;
        tracing::info!(
            id = airplane.id,
            created_by = %airplane.created_by,
            "Airplane created"
        );
        Ok(airplane)
    }

    /// Replaces the mutable fields of an airplane.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airplane does not exist. An update
    /// never creates a record.
    pub async fn update_airplane(
        &self,
        id: i64,
        update: UpdateAirplane,
    ) -> Result<Airplane, AppError> {
        let airplane = self
            .repository
            .update(id, update)
            .await?
            .ok_or_else(|| not_found("Airplane", id, &OwnerScope::Any))?;
        tracing::info!(id, "Airplane updated");
        Ok(airplane)
    }

    /// Deletes an airplane.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the airplane does not exist.
    /// Returns [`AppError::Conflict`] if flights still reference it.
    pub async fn delete_airplane(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found("Airplane", id, &OwnerScope::Any));
        }
        tracing::info!(id, "Airplane deleted");
        Ok(())
    }

    /// Counts registered airplanes.
    pub async fn count_airplanes(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAirplaneRepository;
    use serde_json::json;

    fn airplane(id: i64) -> Airplane {
        Airplane {
            id,
            brand: "Airbus".to_string(),
            model: "A320".to_string(),
            construction_year: 2015,
            airline: "Swiss".to_string(),
            seat_capacity: 180,
            created_by: "admin".to_string(),
        }
    }

    fn update() -> UpdateAirplane {
        UpdateAirplane {
            brand: "Boeing".to_string(),
            model: "737".to_string(),
            construction_year: 2010,
            airline: "Edelweiss".to_string(),
            seat_capacity: 160,
        }
    }

    #[tokio::test]
    async fn test_get_airplane_success() {
        let mut mock_repo = MockAirplaneRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| Ok(Some(airplane(id))));

        let service = AirplaneService::new(Arc::new(mock_repo));

        let result = service.get_airplane(1).await;

        assert_eq!(result.unwrap().model, "A320");
    }

    #[tokio::test]
    async fn test_get_airplane_not_found() {
        let mut mock_repo = MockAirplaneRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AirplaneService::new(Arc::new(mock_repo));

        let result = service.get_airplane(99).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_airplane_passes_creator() {
        let mut mock_repo = MockAirplaneRepository::new();
        mock_repo
            .expect_create()
            .withf(|new| new.created_by == "admin" && new.seat_capacity == 180)
            .times(1)
            .returning(|_| Ok(airplane(5)));

        let service = AirplaneService::new(Arc::new(mock_repo));

        let created = service
            .create_airplane(NewAirplane {
                brand: "Airbus".to_string(),
                model: "A320".to_string(),
                construction_year: 2015,
                airline: "Swiss".to_string(),
                seat_capacity: 180,
                created_by: "admin".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 5);
    }

    #[tokio::test]
    async fn test_update_airplane_success() {
        let mut mock_repo = MockAirplaneRepository::new();
        mock_repo
            .expect_update()
            .withf(|id, update| *id == 3 && update.brand == "Boeing")
            .times(1)
            .returning(|id, update| {
                Ok(Some(Airplane {
                    brand: update.brand,
                    ..airplane(id)
                }))
            });

        let service = AirplaneService::new(Arc::new(mock_repo));

        let updated = service.update_airplane(3, update()).await.unwrap();

        assert_eq!(updated.brand, "Boeing");
        assert_eq!(updated.created_by, "admin");
    }

    #[tokio::test]
    async fn test_update_missing_airplane_is_not_created() {
        let mut mock_repo = MockAirplaneRepository::new();
        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));
        mock_repo.expect_create().never();

        let service = AirplaneService::new(Arc::new(mock_repo));

        let result = service.update_airplane(42, update()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_airplane_not_found() {
        let mut mock_repo = MockAirplaneRepository::new();
        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = AirplaneService::new(Arc::new(mock_repo));

        let result = service.delete_airplane(8).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_referenced_airplane_conflicts() {
        let mut mock_repo = MockAirplaneRepository::new();
        mock_repo.expect_delete().times(1).returning(|_| {
            Err(AppError::conflict(
                "Data integrity violation",
                json!({"constraint": "flights_airplane_id_fkey"}),
            ))
        });

        let service = AirplaneService::new(Arc::new(mock_repo));

        let result = service.delete_airplane(1).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_list_airplanes() {
        let mut mock_repo = MockAirplaneRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![airplane(1), airplane(2)]));

        let service = AirplaneService::new(Arc::new(mock_repo));

        let list = service.list_airplanes().await.unwrap();

        assert_eq!(list.len(), 2);
    }
}
