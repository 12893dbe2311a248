//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource. Handlers check roles
//! through the [`Authorized`](crate::api::middleware::auth::Authorized)
//! extractor and translate DTOs into service calls.

pub mod airplanes;
pub mod bookings;
pub mod flights;
pub mod health;
pub mod passengers;

pub use airplanes::{
    create_airplane_handler, delete_airplane_handler, get_airplane_handler,
    list_airplanes_handler, update_airplane_handler,
};
pub use bookings::{
    admin_create_booking_handler, admin_delete_booking_handler, admin_get_booking_handler,
    admin_list_bookings_handler, admin_update_booking_handler, create_booking_handler,
    delete_booking_handler, get_booking_handler, list_bookings_handler, update_booking_handler,
};
pub use flights::{
    create_flight_handler, delete_flight_handler, get_flight_handler, list_flights_handler,
    update_flight_handler,
};
pub use health::health_handler;
pub use passengers::{
    admin_create_passenger_handler, admin_delete_passenger_handler, admin_get_passenger_handler,
    admin_list_passengers_handler, admin_update_passenger_handler, create_passenger_handler,
    delete_passenger_handler, get_passenger_handler, list_passengers_handler,
    update_passenger_handler,
};
