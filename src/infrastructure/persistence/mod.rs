//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are checked at runtime and mapped through private `FromRow` row types.
//!
//! # Repositories
//!
//! - [`PgAirplaneRepository`] - Airplane catalogue
//! - [`PgFlightRepository`] - Flight schedule
//! - [`PgPassengerRepository`] - Owner-scoped passengers
//! - [`PgBookingRepository`] - Owner-scoped bookings
//!
//! Owner-scoped statements bind the scope as a nullable owner parameter:
//! `($n::TEXT IS NULL OR created_by = $n)`.

pub mod pg_airplane_repository;
pub mod pg_booking_repository;
pub mod pg_flight_repository;
pub mod pg_passenger_repository;

pub use pg_airplane_repository::PgAirplaneRepository;
pub use pg_booking_repository::PgBookingRepository;
pub use pg_flight_repository::PgFlightRepository;
pub use pg_passenger_repository::PgPassengerRepository;
