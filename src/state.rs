//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AirplaneService, AuthService, BookingService, FlightService, PassengerService,
};
use crate::domain::repositories::{
    AirplaneRepository, BookingRepository, FlightRepository, PassengerRepository,
};
use crate::infrastructure::persistence::{
    PgAirplaneRepository, PgBookingRepository, PgFlightRepository, PgPassengerRepository,
};

/// Repository implementations the services are built on.
pub struct Repositories {
    pub airplanes: Arc<dyn AirplaneRepository>,
    pub flights: Arc<dyn FlightRepository>,
    pub passengers: Arc<dyn PassengerRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

impl Repositories {
    /// PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            airplanes: Arc::new(PgAirplaneRepository::new(pool.clone())),
            flights: Arc::new(PgFlightRepository::new(pool.clone())),
            passengers: Arc::new(PgPassengerRepository::new(pool.clone())),
            bookings: Arc::new(PgBookingRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub airplane_service: Arc<AirplaneService>,
    pub flight_service: Arc<FlightService>,
    pub passenger_service: Arc<PassengerService>,
    pub booking_service: Arc<BookingService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(repositories: Repositories, auth_service: AuthService) -> Self {
        Self {
            airplane_service: Arc::new(AirplaneService::new(repositories.airplanes)),
            flight_service: Arc::new(FlightService::new(repositories.flights)),
            passenger_service: Arc::new(PassengerService::new(repositories.passengers)),
            booking_service: Arc::new(BookingService::new(repositories.bookings)),
            auth_service: Arc::new(auth_service),
        }
    }
}
