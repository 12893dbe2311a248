//! Business logic services for the application layer.

pub mod airplane_service;
pub mod auth_service;
pub mod booking_service;
pub mod flight_service;
pub mod passenger_service;

pub use airplane_service::AirplaneService;
pub use auth_service::AuthService;
pub use booking_service::BookingService;
pub use flight_service::FlightService;
pub use passenger_service::PassengerService;

use crate::domain::scope::OwnerScope;
use crate::error::AppError;
use serde_json::json;

/// Not-found error for a record missing from `scope`.
///
/// The message names the owner for user scopes so callers can tell an
/// ownership miss from a mistyped id in logs.
pub(crate) fn not_found(entity: &str, id: i64, scope: &OwnerScope) -> AppError {
    match scope.owner_name() {
        None => AppError::not_found(
            format!("{entity} not found with id: {id}"),
            json!({ "id": id }),
        ),
        Some(owner) => AppError::not_found(
            format!("{entity} not found with id: {id} and createdBy: {owner}"),
            json!({ "id": id, "createdBy": owner }),
        ),
    }
}
