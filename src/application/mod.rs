//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and translate "nothing matched" into
//! the errors handlers report. They consume repository traits and provide a
//! clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::airplane_service::AirplaneService`] - Airplane catalogue
//! - [`services::flight_service::FlightService`] - Flight schedule
//! - [`services::passenger_service::PassengerService`] - Owner-scoped passengers
//! - [`services::booking_service::BookingService`] - Owner-scoped bookings
//! - [`services::auth_service::AuthService`] - Bearer token verification

pub mod services;
