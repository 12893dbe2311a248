//! Handlers for airplane endpoints. Administrators only.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::airplane::{AirplaneRequest, AirplaneResponse};
use crate::api::extract::{IdPath, ValidatedJson};
use crate::api::middleware::auth::{AdminOnly, Authorized};
use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

/// Lists all airplanes.
///
/// # Endpoint
///
/// `GET /api/airplane`
#[utoipa::path(
    get,
    path = "/api/airplane",
    tag = "airplane",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "All airplanes", body = [AirplaneResponse]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "ADMIN role required", body = ErrorResponse)
    )
)]
pub async fn list_airplanes_handler(
    _auth: Authorized<AdminOnly>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AirplaneResponse>>, AppError> {
    let airplanes = state.airplane_service.list_airplanes().await?;
    Ok(Json(airplanes.into_iter().map(Into::into).collect()))
}

/// Returns one airplane.
///
/// # Endpoint
///
/// `GET /api/airplane/{id}`
#[utoipa::path(
    get,
    path = "/api/airplane/{id}",
    tag = "airplane",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Airplane id")),
    responses(
        (status = 200, description = "The airplane", body = AirplaneResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn get_airplane_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<Json<AirplaneResponse>, AppError> {
    let airplane = state.airplane_service.get_airplane(id).await?;
    Ok(Json(airplane.into()))
}

/// Registers an airplane owned by the caller.
///
/// # Endpoint
///
/// `POST /api/airplane`
///
/// # Errors
///
/// Returns 400 if a field violates its bounds.
#[utoipa::path(
    post,
    path = "/api/airplane",
    tag = "airplane",
    security(("bearerAuth" = [])),
    request_body = AirplaneRequest,
    responses(
        (status = 200, description = "Created airplane", body = AirplaneResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_airplane_handler(
    Authorized { principal, .. }: Authorized<AdminOnly>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AirplaneRequest>,
) -> Result<Json<AirplaneResponse>, AppError> {
    let airplane = state
        .airplane_service
        .create_airplane(payload.into_new(principal.name))
        .await?;
    Ok(Json(airplane.into()))
}

/// Replaces an airplane.
///
/// # Endpoint
///
/// `PUT /api/airplane/{id}`
///
/// # Errors
///
/// Returns 404 if the airplane does not exist.
#[utoipa::path(
    put,
    path = "/api/airplane/{id}",
    tag = "airplane",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Airplane id")),
    request_body = AirplaneRequest,
    responses(
        (status = 200, description = "Updated airplane", body = AirplaneResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn update_airplane_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AirplaneRequest>,
) -> Result<Json<AirplaneResponse>, AppError> {
    let airplane = state
        .airplane_service
        .update_airplane(id, payload.into_update())
        .await?;
    Ok(Json(airplane.into()))
}

/// Deletes an airplane.
///
/// # Endpoint
///
/// `DELETE /api/airplane/{id}`
///
/// # Errors
///
/// Returns 404 if the airplane does not exist.
/// Returns 409 if flights still reference it.
#[utoipa::path(
    delete,
    path = "/api/airplane/{id}",
    tag = "airplane",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Airplane id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id", body = ErrorResponse),
        (status = 409, description = "Still referenced by flights", body = ErrorResponse)
    )
)]
pub async fn delete_airplane_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.airplane_service.delete_airplane(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
