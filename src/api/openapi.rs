//! OpenAPI document generated from handler and DTO annotations.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::dto::{airplane, booking, flight, health, passenger};
use crate::api::handlers::{airplanes, bookings, flights, passengers};
use crate::error::{ErrorInfo, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Flight Booking API",
        description = "Airplanes, flights, passengers and bookings with role-based access."
    ),
    paths(
        airplanes::list_airplanes_handler,
        airplanes::get_airplane_handler,
        airplanes::create_airplane_handler,
        airplanes::update_airplane_handler,
        airplanes::delete_airplane_handler,
        flights::list_flights_handler,
        flights::get_flight_handler,
        flights::create_flight_handler,
        flights::update_flight_handler,
        flights::delete_flight_handler,
        passengers::admin_list_passengers_handler,
        passengers::admin_get_passenger_handler,
        passengers::admin_create_passenger_handler,
        passengers::admin_update_passenger_handler,
        passengers::admin_delete_passenger_handler,
        passengers::list_passengers_handler,
        passengers::get_passenger_handler,
        passengers::create_passenger_handler,
        passengers::update_passenger_handler,
        passengers::delete_passenger_handler,
        bookings::admin_list_bookings_handler,
        bookings::admin_get_booking_handler,
        bookings::admin_create_booking_handler,
        bookings::admin_update_booking_handler,
        bookings::admin_delete_booking_handler,
        bookings::list_bookings_handler,
        bookings::get_booking_handler,
        bookings::create_booking_handler,
        bookings::update_booking_handler,
        bookings::delete_booking_handler,
        crate::api::handlers::health::health_handler,
    ),
    components(schemas(
        airplane::AirplaneRequest,
        airplane::AirplaneResponse,
        flight::FlightRequest,
        flight::FlightResponse,
        passenger::PassengerRequest,
        passenger::AdminPassengerRequest,
        passenger::PassengerResponse,
        booking::BookingRequest,
        booking::AdminBookingRequest,
        booking::BookingResponse,
        health::HealthResponse,
        health::HealthChecks,
        health::CheckStatus,
        ErrorResponse,
        ErrorInfo,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "airplane", description = "Airplane catalogue"),
        (name = "flight", description = "Flight schedule"),
        (name = "passenger-admin", description = "Passengers of every owner"),
        (name = "passenger", description = "Own passengers"),
        (name = "booking-admin", description = "Bookings of every owner"),
        (name = "booking", description = "Own bookings"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Registers the `bearerAuth` scheme referenced by the protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
