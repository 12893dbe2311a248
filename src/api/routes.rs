//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`]. Role checks happen per handler.

use crate::api::handlers::{
    admin_create_booking_handler, admin_create_passenger_handler, admin_delete_booking_handler,
    admin_delete_passenger_handler, admin_get_booking_handler, admin_get_passenger_handler,
    admin_list_bookings_handler, admin_list_passengers_handler, admin_update_booking_handler,
    admin_update_passenger_handler, create_airplane_handler, create_booking_handler,
    create_flight_handler, create_passenger_handler, delete_airplane_handler,
    delete_booking_handler, delete_flight_handler, delete_passenger_handler, get_airplane_handler,
    get_booking_handler, get_flight_handler, get_passenger_handler, list_airplanes_handler,
    list_bookings_handler, list_flights_handler, list_passengers_handler, update_airplane_handler,
    update_booking_handler, update_flight_handler, update_passenger_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

/// All API routes, relative to `/api`.
///
/// # Endpoints
///
/// - `/airplane[/{id}]`        - Airplane catalogue (ADMIN)
/// - `/flight[/{id}]`          - Flight schedule (list: ADMIN or USER, rest: ADMIN)
/// - `/admin/passenger[/{id}]` - Every passenger (ADMIN)
/// - `/passenger[/{id}]`       - Own passengers (USER)
/// - `/admin/booking[/{id}]`   - Every booking (ADMIN)
/// - `/booking[/{id}]`         - Own bookings (USER)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/airplane",
            get(list_airplanes_handler).post(create_airplane_handler),
        )
        .route(
            "/airplane/{id}",
            get(get_airplane_handler)
                .put(update_airplane_handler)
                .delete(delete_airplane_handler),
        )
        .route(
            "/flight",
            get(list_flights_handler).post(create_flight_handler),
        )
        .route(
            "/flight/{id}",
            get(get_flight_handler)
                .put(update_flight_handler)
                .delete(delete_flight_handler),
        )
        .route(
            "/admin/passenger",
            get(admin_list_passengers_handler).post(admin_create_passenger_handler),
        )
        .route(
            "/admin/passenger/{id}",
            get(admin_get_passenger_handler)
                .put(admin_update_passenger_handler)
                .delete(admin_delete_passenger_handler),
        )
        .route(
            "/passenger",
            get(list_passengers_handler).post(create_passenger_handler),
        )
        .route(
            "/passenger/{id}",
            get(get_passenger_handler)
                .put(update_passenger_handler)
                .delete(delete_passenger_handler),
        )
        .route(
            "/admin/booking",
            get(admin_list_bookings_handler).post(admin_create_booking_handler),
        )
        .route(
            "/admin/booking/{id}",
            get(admin_get_booking_handler)
                .put(admin_update_booking_handler)
                .delete(admin_delete_booking_handler),
        )
        .route(
            "/booking",
            get(list_bookings_handler).post(create_booking_handler),
        )
        .route(
            "/booking/{id}",
            get(get_booking_handler)
                .put(update_booking_handler)
                .delete(delete_booking_handler),
        )
}

/// [`protected_routes`] behind the bearer authentication layer.
pub fn api_router(state: &AppState) -> Router<AppState> {
    protected_routes().route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
}
