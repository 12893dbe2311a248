//! Handlers for flight endpoints.
//!
//! Listing is open to administrators and users; everything else is
//! administrator-only.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::flight::{FlightRequest, FlightResponse};
use crate::api::extract::{IdPath, ValidatedJson};
use crate::api::middleware::auth::{AdminOnly, AdminOrUser, Authorized};
use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

/// Lists all flights.
///
/// # Endpoint
///
/// `GET /api/flight`
#[utoipa::path(
    get,
    path = "/api/flight",
    tag = "flight",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "All flights", body = [FlightResponse]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "ADMIN or USER role required", body = ErrorResponse)
    )
)]
pub async fn list_flights_handler(
    _auth: Authorized<AdminOrUser>,
    State(state): State<AppState>,
) -> Result<Json<Vec<FlightResponse>>, AppError> {
    let flights = state.flight_service.list_flights().await?;
    Ok(Json(flights.into_iter().map(Into::into).collect()))
}

/// `GET /api/flight/{id}`
#[utoipa::path(
    get,
    path = "/api/flight/{id}",
    tag = "flight",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Flight id")),
    responses(
        (status = 200, description = "The flight", body = FlightResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn get_flight_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<Json<FlightResponse>, AppError> {
    let flight = state.flight_service.get_flight(id).await?;
    Ok(Json(flight.into()))
}

/// Schedules a flight.
///
/// # Endpoint
///
/// `POST /api/flight`
///
/// # Errors
///
/// Returns 409 if `airplaneId` does not reference an existing airplane.
#[utoipa::path(
    post,
    path = "/api/flight",
    tag = "flight",
    security(("bearerAuth" = [])),
    request_body = FlightRequest,
    responses(
        (status = 200, description = "Created flight", body = FlightResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Unknown airplane", body = ErrorResponse)
    )
)]
pub async fn create_flight_handler(
    Authorized { principal, .. }: Authorized<AdminOnly>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<FlightRequest>,
) -> Result<Json<FlightResponse>, AppError> {
    let flight = state
        .flight_service
        .create_flight(payload.into_new(principal.name))
        .await?;
    Ok(Json(flight.into()))
}

/// `PUT /api/flight/{id}`
#[utoipa::path(
    put,
    path = "/api/flight/{id}",
    tag = "flight",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Flight id")),
    request_body = FlightRequest,
    responses(
        (status = 200, description = "Updated flight", body = FlightResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
        (status = 409, description = "Unknown airplane", body = ErrorResponse)
    )
)]
pub async fn update_flight_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<FlightRequest>,
) -> Result<Json<FlightResponse>, AppError> {
    let flight = state
        .flight_service
        .update_flight(id, payload.into_update())
        .await?;
    Ok(Json(flight.into()))
}

/// Deletes a flight.
///
/// # Endpoint
///
/// `DELETE /api/flight/{id}`
///
/// # Errors
///
/// Returns 409 if bookings still reference the flight.
#[utoipa::path(
    delete,
    path = "/api/flight/{id}",
    tag = "flight",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Flight id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id", body = ErrorResponse),
        (status = 409, description = "Still referenced by bookings", body = ErrorResponse)
    )
)]
pub async fn delete_flight_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.flight_service.delete_flight(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
