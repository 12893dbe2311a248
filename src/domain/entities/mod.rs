//! Core domain entities representing the booking data model.
//!
//! Entities are plain data structures without persistence or HTTP concerns.
//!
//! # Entity Types
//!
//! - [`Airplane`] - An aircraft operated by an airline
//! - [`Flight`] - A scheduled leg flown by an airplane
//! - [`Passenger`] - A traveller registered by a user
//! - [`Booking`] - A passenger's itinerary of up to three flights
//!
//! # Design Pattern
//!
//! Each entity has separate input structs:
//! - `NewAirplane`, `NewFlight`, `NewPassenger`, `NewBooking` - For creating records
//! - `UpdateAirplane`, `UpdateFlight`, `UpdatePassenger`, `UpdateBooking` - For
//!   full-replacement updates of the mutable fields

pub mod airplane;
pub mod booking;
pub mod flight;
pub mod passenger;

pub use airplane::{Airplane, NewAirplane, UpdateAirplane};
pub use booking::{Booking, NewBooking, UpdateBooking};
pub use flight::{Flight, NewFlight, UpdateFlight};
pub use passenger::{NewPassenger, Passenger, UpdatePassenger};
