//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern. They are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AirplaneRepository`] - Airplane catalogue
//! - [`FlightRepository`] - Flight schedule
//! - [`PassengerRepository`] - Owner-scoped passengers
//! - [`BookingRepository`] - Owner-scoped bookings
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod airplane_repository;
pub mod booking_repository;
pub mod flight_repository;
pub mod passenger_repository;

pub use airplane_repository::AirplaneRepository;
pub use booking_repository::BookingRepository;
pub use flight_repository::FlightRepository;
pub use passenger_repository::PassengerRepository;

#[cfg(test)]
pub use airplane_repository::MockAirplaneRepository;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
#[cfg(test)]
pub use flight_repository::MockFlightRepository;
#[cfg(test)]
pub use passenger_repository::MockPassengerRepository;
