//! Handlers for booking endpoints.
//!
//! `/api/admin/booking` manages every booking and lets administrators set the
//! owner. `/api/booking` is restricted to the caller's own bookings.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::booking::{AdminBookingRequest, BookingRequest, BookingResponse};
use crate::api::extract::{IdPath, ValidatedJson};
use crate::api::middleware::auth::{AdminOnly, Authorized, UserOnly};
use crate::domain::scope::OwnerScope;
use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

// ─── Admin ───────────────────────────────────────────────────────────────────

/// `GET /api/admin/booking`
#[utoipa::path(
    get,
    path = "/api/admin/booking",
    tag = "booking-admin",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "All bookings", body = [BookingResponse]),
        (status = 403, description = "ADMIN role required", body = ErrorResponse)
    )
)]
pub async fn admin_list_bookings_handler(
    _auth: Authorized<AdminOnly>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = state.booking_service.list_bookings(&OwnerScope::Any).await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// `GET /api/admin/booking/{id}`
#[utoipa::path(
    get,
    path = "/api/admin/booking/{id}",
    tag = "booking-admin",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Booking id")),
    responses(
        (status = 200, description = "The booking", body = BookingResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn admin_get_booking_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state
        .booking_service
        .get_booking(id, &OwnerScope::Any)
        .await?;
    Ok(Json(booking.into()))
}

/// Creates a booking for the owner named in `createdBy`.
///
/// # Endpoint
///
/// `POST /api/admin/booking`
///
/// # Errors
///
/// Returns 409 if the passenger or a flight does not exist.
#[utoipa::path(
    post,
    path = "/api/admin/booking",
    tag = "booking-admin",
    security(("bearerAuth" = [])),
    request_body = AdminBookingRequest,
    responses(
        (status = 200, description = "Created booking", body = BookingResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Unknown passenger or flight", body = ErrorResponse)
    )
)]
pub async fn admin_create_booking_handler(
    _auth: Authorized<AdminOnly>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AdminBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state
        .booking_service
        .create_booking(payload.booking.into_new(payload.created_by))
        .await?;
    Ok(Json(booking.into()))
}

/// Replaces any booking, including its owner.
///
/// # Endpoint
///
/// `PUT /api/admin/booking/{id}`
#[utoipa::path(
    put,
    path = "/api/admin/booking/{id}",
    tag = "booking-admin",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Booking id")),
    request_body = AdminBookingRequest,
    responses(
        (status = 200, description = "Updated booking", body = BookingResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
        (status = 409, description = "Unknown passenger or flight", body = ErrorResponse)
    )
)]
pub async fn admin_update_booking_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AdminBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let update = payload.booking.into_update(Some(payload.created_by));
    let booking = state
        .booking_service
        .update_booking(id, update, &OwnerScope::Any)
        .await?;
    Ok(Json(booking.into()))
}

/// `DELETE /api/admin/booking/{id}`
#[utoipa::path(
    delete,
    path = "/api/admin/booking/{id}",
    tag = "booking-admin",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Booking id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn admin_delete_booking_handler(
    _auth: Authorized<AdminOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .booking_service
        .delete_booking(id, &OwnerScope::Any)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─── User ────────────────────────────────────────────────────────────────────

/// Lists the caller's bookings.
///
/// # Endpoint
///
/// `GET /api/booking`
#[utoipa::path(
    get,
    path = "/api/booking",
    tag = "booking",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Own bookings", body = [BookingResponse]),
        (status = 403, description = "USER role required", body = ErrorResponse)
    )
)]
pub async fn list_bookings_handler(
    Authorized { principal, .. }: Authorized<UserOnly>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = state
        .booking_service
        .list_bookings(&OwnerScope::owner(principal.name))
        .await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// `GET /api/booking/{id}`
#[utoipa::path(
    get,
    path = "/api/booking/{id}",
    tag = "booking",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Booking id")),
    responses(
        (status = 200, description = "The booking", body = BookingResponse),
        (status = 404, description = "Unknown or foreign id", body = ErrorResponse)
    )
)]
pub async fn get_booking_handler(
    Authorized { principal, .. }: Authorized<UserOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state
        .booking_service
        .get_booking(id, &OwnerScope::owner(principal.name))
        .await?;
    Ok(Json(booking.into()))
}

/// Books an itinerary owned by the caller.
///
/// # Endpoint
///
/// `POST /api/booking`
///
/// # Errors
///
/// Returns 409 if the passenger or a flight does not exist.
#[utoipa::path(
    post,
    path = "/api/booking",
    tag = "booking",
    security(("bearerAuth" = [])),
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Created booking", body = BookingResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Unknown passenger or flight", body = ErrorResponse)
    )
)]
pub async fn create_booking_handler(
    Authorized { principal, .. }: Authorized<UserOnly>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state
        .booking_service
        .create_booking(payload.into_new(principal.name))
        .await?;
    Ok(Json(booking.into()))
}

/// Replaces one of the caller's bookings. The owner never changes.
///
/// # Endpoint
///
/// `PUT /api/booking/{id}`
#[utoipa::path(
    put,
    path = "/api/booking/{id}",
    tag = "booking",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Booking id")),
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Updated booking", body = BookingResponse),
        (status = 404, description = "Unknown or foreign id", body = ErrorResponse)
    )
)]
pub async fn update_booking_handler(
    Authorized { principal, .. }: Authorized<UserOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state
        .booking_service
        .update_booking(
            id,
            payload.into_update(None),
            &OwnerScope::owner(principal.name),
        )
        .await?;
    Ok(Json(booking.into()))
}

/// `DELETE /api/booking/{id}`
#[utoipa::path(
    delete,
    path = "/api/booking/{id}",
    tag = "booking",
    security(("bearerAuth" = [])),
    params(("id" = i64, Path, description = "Booking id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown or foreign id", body = ErrorResponse)
    )
)]
pub async fn delete_booking_handler(
    Authorized { principal, .. }: Authorized<UserOnly>,
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .booking_service
        .delete_booking(id, &OwnerScope::owner(principal.name))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
