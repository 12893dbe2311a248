//! Handlers for passenger endpoints.
//!
//! `/api/admin/passenger` manages every passenger and lets administrators set
//! the owner. `/api/passenger` is restricted to the caller's own passengers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::passenger::{AdminPassengerRequest, PassengerRequest, PassengerResponse};
use crate::api::extract::{IdPath, ValidatedJson};
use crate::api::middleware::auth::{AdminOnly, Authorized, UserOnly};
use crate::domain::scope::OwnerScope;
use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

// ─── Admin ───────────────────────────────────────────────────────────────────

/// `GET /api/admin/passenger`
#[utoipa::path(
    get,
    path = "/api/admin/passenger",
    tag = "passenger-admin",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "All passengers", body = [PassengerResponse]),
        (status = 403, description = "ADMIN role required", body = ErrorResponse)
    )
)]
pub async fn admin_list_passengers_handler(
    _auth: Authorized<AdminOnly>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PassengerResponse>>, AppError> {
    let passengers = state
        .passenger_service
        .list_passengers(&OwnerScope::Any)
        .await?;
    Ok(Json(passengers.into_iter().map(Into::into).collect()))
}

/// `GET /api/admin/passenger/{id}`
#[utoipa::path(
    get,
    path = "/api/admin/passenger/{id}",
    tag = "passenger-admin",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Passenger id")),
    responses(
        (status = 200, description = "The passenger", body = PassengerResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn admin_get_passenger_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<Json<PassengerResponse>, AppError> {
    let passenger = state
        .passenger_service
        .get_passenger(id, &OwnerScope::Any)
        .await?;
    Ok(Json(passenger.into()))
}

/// Creates a passenger for the owner named in `createdBy`.
///
/// # Endpoint
///
/// `POST /api/admin/passenger`
#[utoipa::path(
    post,
    path = "/api/admin/passenger",
    tag = "passenger-admin",
    security(("bearerAuth" = [])),
    request_body = AdminPassengerRequest,
    responses(
        (status = 200, description = "Created passenger", body = PassengerResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn admin_create_passenger_handler(
    _auth: Authorized<AdminOnly>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AdminPassengerRequest>,
) -> Result<Json<PassengerResponse>, AppError> {
    let passenger = state
        .passenger_service
        .create_passenger(payload.passenger.into_new(payload.created_by))
        .await?;
    Ok(Json(passenger.into()))
}

/// Replaces any passenger, including its owner.
///
/// # Endpoint
///
/// `PUT /api/admin/passenger/{id}`
#[utoipa::path(
    put,
    path = "/api/admin/passenger/{id}",
    tag = "passenger-admin",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Passenger id")),
    request_body = AdminPassengerRequest,
    responses(
        (status = 200, description = "Updated passenger", body = PassengerResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn admin_update_passenger_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AdminPassengerRequest>,
) -> Result<Json<PassengerResponse>, AppError> {
    let update = payload.passenger.into_update(Some(payload.created_by));
    let passenger = state
        .passenger_service
        .update_passenger(id, update, &OwnerScope::Any)
        .await?;
    Ok(Json(passenger.into()))
}

/// `DELETE /api/admin/passenger/{id}`
#[utoipa::path(
    delete,
    path = "/api/admin/passenger/{id}",
    tag = "passenger-admin",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Passenger id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id", body = ErrorResponse),
        (status = 409, description = "Still referenced by bookings", body = ErrorResponse)
    )
)]
pub async fn admin_delete_passenger_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .passenger_service
        .delete_passenger(id, &OwnerScope::Any)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─── User ────────────────────────────────────────────────────────────────────

/// Lists the caller's passengers.
///
/// # Endpoint
///
/// `GET /api/passenger`
#[utoipa::path(
    get,
    path = "/api/passenger",
    tag = "passenger",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Own passengers", body = [PassengerResponse]),
        (status = 403, description = "USER role required", body = ErrorResponse)
    )
)]
pub async fn list_passengers_handler(
    Authorized { principal, .. }: Authorized<UserOnly>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PassengerResponse>>, AppError> {
    let passengers = state
        .passenger_service
        .list_passengers(&OwnerScope::owner(principal.name))
        .await?;
    Ok(Json(passengers.into_iter().map(Into::into).collect()))
}

/// Returns one of the caller's passengers.
///
/// # Endpoint
///
/// `GET /api/passenger/{id}`
///
/// # Errors
///
/// Returns 404 if the passenger does not exist or belongs to someone else.
#[utoipa::path(
    get,
    path = "/api/passenger/{id}",
    tag = "passenger",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Passenger id")),
    responses(
        (status = 200, description = "The passenger", body = PassengerResponse),
        (status = 404, description = "Unknown or foreign id", body = ErrorResponse)
    )
)]
pub async fn get_passenger_handler(
    Authorized { principal, .. }: Authorized<UserOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<Json<PassengerResponse>, AppError> {
    let passenger = state
        .passenger_service
        .get_passenger(id, &OwnerScope::owner(principal.name))
        .await?;
    Ok(Json(passenger.into()))
}

/// Registers a passenger owned by the caller.
///
/// # Endpoint
///
/// `POST /api/passenger`
#[utoipa::path(
    post,
    path = "/api/passenger",
    tag = "passenger",
    security(("bearerAuth" = [])),
    request_body = PassengerRequest,
    responses(
        (status = 200, description = "Created passenger", body = PassengerResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_passenger_handler(
    Authorized { principal, .. }: Authorized<UserOnly>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PassengerRequest>,
) -> Result<Json<PassengerResponse>, AppError> {
    let passenger = state
        .passenger_service
        .create_passenger(payload.into_new(principal.name))
        .await?;
    Ok(Json(passenger.into()))
}

/// Replaces one of the caller's passengers. The owner never changes.
///
/// # Endpoint
///
/// `PUT /api/passenger/{id}`
#[utoipa::path(
    put,
    path = "/api/passenger/{id}",
    tag = "passenger",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Passenger id")),
    request_body = PassengerRequest,
    responses(
        (status = 200, description = "Updated passenger", body = PassengerResponse),
        (status = 404, description = "Unknown or foreign id", body = ErrorResponse)
    )
)]
pub async fn update_passenger_handler(
    Authorized { principal, .. }: Authorized<UserOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PassengerRequest>,
) -> Result<Json<PassengerResponse>, AppError> {
    let passenger = state
        .passenger_service
        .update_passenger(
            id,
            payload.into_update(None),
            &OwnerScope::owner(principal.name),
        )
        .await?;
    Ok(Json(passenger.into()))
}

/// `DELETE /api/passenger/{id}`
#[utoipa::path(
    delete,
    path = "/api/passenger/{id}",
    tag = "passenger",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Passenger id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown or foreign id", body = ErrorResponse),
        (status = 409, description = "Still referenced by bookings", body = ErrorResponse)
    )
)]
pub async fn delete_passenger_handler(
    Authorized { principal, .. }: Authorized<UserOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .passenger_service
        .delete_passenger(id, &OwnerScope::owner(principal.name))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
