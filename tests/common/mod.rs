#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex, MutexGuard};

use flight_booking::application::services::AuthService;
use flight_booking::application::services::auth_service::{AuthSettings, Claims, sign_token};
use flight_booking::domain::entities::{
    Airplane, Booking, Flight, NewAirplane, NewBooking, NewFlight, NewPassenger, Passenger,
    UpdateAirplane, UpdateBooking, UpdateFlight, UpdatePassenger,
};
use flight_booking::domain::repositories::{
    AirplaneRepository, BookingRepository, FlightRepository, PassengerRepository,
};
use flight_booking::domain::scope::OwnerScope;
use flight_booking::error::AppError;
use flight_booking::routes::app_router;
use flight_booking::state::{AppState, Repositories};

pub const TEST_SECRET: &str = "test-signing-secret";

#[derive(Default)]
struct Tables {
    next_id: i64,
    airplanes: Vec<Airplane>,
    flights: Vec<Flight>,
    passengers: Vec<Passenger>,
    bookings: Vec<Booking>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn check_flights(&self, ids: &[Option<i64>]) -> Result<(), AppError> {
        for id in ids.iter().flatten() {
            if !self.flights.iter().any(|f| f.id == *id) {
                return Err(integrity_violation("bookings_flight_id_fkey"));
            }
        }
        Ok(())
    }
}

fn integrity_violation(constraint: &str) -> AppError {
    AppError::conflict(
        "Data integrity violation",
        json!({ "constraint": constraint }),
    )
}

/// Shared in-memory tables standing in for PostgreSQL, including its
/// foreign keys.
#[derive(Clone, Default)]
pub struct InMemoryDb {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryDb {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            airplanes: Arc::new(self.clone()),
            flights: Arc::new(self.clone()),
            passengers: Arc::new(self.clone()),
            bookings: Arc::new(self.clone()),
        }
    }
}

#[async_trait]
impl AirplaneRepository for InMemoryDb {
    async fn create(&self, new: NewAirplane) -> Result<Airplane, AppError> {
        let mut t = self.lock();
        let airplane = Airplane {
            id: t.next_id(),
            brand: new.brand,
            model: new.model,
            construction_year: new.construction_year,
            airline: new.airline,
            seat_capacity: new.seat_capacity,
            created_by: new.created_by,
        };
        t.airplanes.push(airplane.clone());
        Ok(airplane)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Airplane>, AppError> {
        Ok(self.lock().airplanes.iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Airplane>, AppError> {
        Ok(self.lock().airplanes.clone())
    }

    async fn update(&self, id: i64, update: UpdateAirplane) -> Result<Option<Airplane>, AppError> {
        let mut t = self.lock();
        Ok(t.airplanes.iter_mut().find(|a| a.id == id).map(|a| {
            a.brand = update.brand;
            a.model = update.model;
            a.construction_year = update.construction_year;
            a.airline = update.airline;
            a.seat_capacity = update.seat_capacity;
            a.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.lock();
        if t.flights.iter().any(|f| f.airplane_id == id) {
            return Err(integrity_violation("flights_airplane_id_fkey"));
        }
        let before = t.airplanes.len();
        t.airplanes.retain(|a| a.id != id);
        Ok(t.airplanes.len() < before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.lock().airplanes.len() as i64)
    }
}

#[async_trait]
impl FlightRepository for InMemoryDb {
    async fn create(&self, new: NewFlight) -> Result<Flight, AppError> {
        let mut t = self.lock();
        if !t.airplanes.iter().any(|a| a.id == new.airplane_id) {
            return Err(integrity_violation("flights_airplane_id_fkey"));
        }
        let flight = Flight {
            id: t.next_id(),
            airplane_id: new.airplane_id,
            origin: new.origin,
            destination: new.destination,
            departure: new.departure,
            arrival: new.arrival,
            created_by: new.created_by,
        };
        t.flights.push(flight.clone());
        Ok(flight)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Flight>, AppError> {
        Ok(self.lock().flights.iter().find(|f| f.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Flight>, AppError> {
        Ok(self.lock().flights.clone())
    }

    async fn update(&self, id: i64, update: UpdateFlight) -> Result<Option<Flight>, AppError> {
        let mut t = self.lock();
        if !t.flights.iter().any(|f| f.id == id) {
            return Ok(None);
        }
        if !t.airplanes.iter().any(|a| a.id == update.airplane_id) {
            return Err(integrity_violation("flights_airplane_id_fkey"));
        }
        Ok(t.flights.iter_mut().find(|f| f.id == id).map(|f| {
            f.airplane_id = update.airplane_id;
            f.origin = update.origin;
            f.destination = update.destination;
            f.departure = update.departure;
            f.arrival = update.arrival;
            f.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.lock();
        if t.bookings.iter().any(|b| b.flight_ids().contains(&id)) {
            return Err(integrity_violation("bookings_first_flight_id_fkey"));
        }
        let before = t.flights.len();
        t.flights.retain(|f| f.id != id);
        Ok(t.flights.len() < before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.lock().flights.len() as i64)
    }
}

#[async_trait]
impl PassengerRepository for InMemoryDb {
    async fn create(&self, new: NewPassenger) -> Result<Passenger, AppError> {
        let mut t = self.lock();
        let passenger = Passenger {
            id: t.next_id(),
            lastname: new.lastname,
            firstname: new.firstname,
            age: new.age,
            nationality: new.nationality,
            created_by: new.created_by,
        };
        t.passengers.push(passenger.clone());
        Ok(passenger)
    }

    async fn find_by_id(&self, id: i64, scope: &OwnerScope) -> Result<Option<Passenger>, AppError> {
        Ok(self
            .lock()
            .passengers
            .iter()
            .find(|p| p.id == id && scope.permits(&p.created_by))
            .cloned())
    }

    async fn list(&self, scope: &OwnerScope) -> Result<Vec<Passenger>, AppError> {
        Ok(self
            .lock()
            .passengers
            .iter()
            .filter(|p| scope.permits(&p.created_by))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        update: UpdatePassenger,
        scope: &OwnerScope,
    ) -> Result<Option<Passenger>, AppError> {
        let mut t = self.lock();
        Ok(t.passengers
            .iter_mut()
            .find(|p| p.id == id && scope.permits(&p.created_by))
            .map(|p| {
                p.lastname = update.lastname;
                p.firstname = update.firstname;
                p.age = update.age;
                p.nationality = update.nationality;
                if let Some(owner) = update.created_by {
                    p.created_by = owner;
                }
                p.clone()
            }))
    }

    async fn delete(&self, id: i64, scope: &OwnerScope) -> Result<bool, AppError> {
        let mut t = self.lock();
        let visible = t
            .passengers
            .iter()
            .any(|p| p.id == id && scope.permits(&p.created_by));
        if !visible {
            return Ok(false);
        }
        if t.bookings.iter().any(|b| b.passenger_id == id) {
            return Err(integrity_violation("bookings_passenger_id_fkey"));
        }
        t.passengers.retain(|p| p.id != id);
        Ok(true)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.lock().passengers.len() as i64)
    }
}

#[async_trait]
impl BookingRepository for InMemoryDb {
    async fn create(&self, new: NewBooking) -> Result<Booking, AppError> {
        let mut t = self.lock();
        if !t.passengers.iter().any(|p| p.id == new.passenger_id) {
            return Err(integrity_violation("bookings_passenger_id_fkey"));
        }
        t.check_flights(&[
            Some(new.first_flight_id),
            new.second_flight_id,
            new.third_flight_id,
        ])?;
        let booking = Booking {
            id: t.next_id(),
            passenger_id: new.passenger_id,
            origin: new.origin,
            destination: new.destination,
            departure: new.departure,
            arrival: new.arrival,
            first_flight_id: new.first_flight_id,
            second_flight_id: new.second_flight_id,
            third_flight_id: new.third_flight_id,
            booking_date: new.booking_date,
            created_by: new.created_by,
        };
        t.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: i64, scope: &OwnerScope) -> Result<Option<Booking>, AppError> {
        Ok(self
            .lock()
            .bookings
            .iter()
            .find(|b| b.id == id && scope.permits(&b.created_by))
            .cloned())
    }

    async fn list(&self, scope: &OwnerScope) -> Result<Vec<Booking>, AppError> {
        Ok(self
            .lock()
            .bookings
            .iter()
            .filter(|b| scope.permits(&b.created_by))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        update: UpdateBooking,
        scope: &OwnerScope,
    ) -> Result<Option<Booking>, AppError> {
        let mut t = self.lock();
        let visible = t
            .bookings
            .iter()
            .any(|b| b.id == id && scope.permits(&b.created_by));
        if !visible {
            return Ok(None);
        }
        if !t.passengers.iter().any(|p| p.id == update.passenger_id) {
            return Err(integrity_violation("bookings_passenger_id_fkey"));
        }
        t.check_flights(&[
            Some(update.first_flight_id),
            update.second_flight_id,
            update.third_flight_id,
        ])?;
        Ok(t.bookings.iter_mut().find(|b| b.id == id).map(|b| {
            b.passenger_id = update.passenger_id;
            b.origin = update.origin;
            b.destination = update.destination;
            b.departure = update.departure;
            b.arrival = update.arrival;
            b.first_flight_id = update.first_flight_id;
            b.second_flight_id = update.second_flight_id;
            b.third_flight_id = update.third_flight_id;
            b.booking_date = update.booking_date;
            if let Some(owner) = update.created_by {
                b.created_by = owner;
            }
            b.clone()
        }))
    }

    async fn delete(&self, id: i64, scope: &OwnerScope) -> Result<bool, AppError> {
        let mut t = self.lock();
        let before = t.bookings.len();
        t.bookings
            .retain(|b| !(b.id == id && scope.permits(&b.created_by)));
        Ok(t.bookings.len() < before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.lock().bookings.len() as i64)
    }
}

/// Repository that fails every call, for degraded health checks.
pub struct FailingAirplanes;

#[async_trait]
impl AirplaneRepository for FailingAirplanes {
    async fn create(&self, _new: NewAirplane) -> Result<Airplane, AppError> {
        Err(down())
    }
    async fn find_by_id(&self, _id: i64) -> Result<Option<Airplane>, AppError> {
        Err(down())
    }
    async fn list(&self) -> Result<Vec<Airplane>, AppError> {
        Err(down())
    }
    async fn update(&self, _id: i64, _u: UpdateAirplane) -> Result<Option<Airplane>, AppError> {
        Err(down())
    }
    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(down())
    }
    async fn count(&self) -> Result<i64, AppError> {
        Err(down())
    }
}

fn down() -> AppError {
    AppError::internal("Database error", json!({}))
}

pub fn test_auth_service() -> AuthService {
    AuthService::new(AuthSettings::with_secret(TEST_SECRET)).unwrap()
}

pub fn create_test_state(db: &InMemoryDb) -> AppState {
    AppState::new(db.repositories(), test_auth_service())
}

pub fn make_server(db: &InMemoryDb) -> TestServer {
    TestServer::new(app_router(create_test_state(db), None)).unwrap()
}

/// Signed bearer value for `subject` holding realm `roles`.
pub fn bearer(subject: &str, roles: &[&str]) -> String {
    let claims = Claims::for_subject(
        subject,
        roles.iter().map(|r| r.to_string()).collect(),
        chrono::Duration::minutes(5),
    );
    format!("Bearer {}", sign_token(&claims, TEST_SECRET).unwrap())
}

pub fn admin() -> String {
    bearer("admin", &["ADMIN"])
}

pub fn user(name: &str) -> String {
    bearer(name, &["USER"])
}

pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

// ─── Request bodies ──────────────────────────────────────────────────────────

pub fn airplane_body() -> Value {
    json!({
        "brand": "Airbus",
        "model": "A320neo",
        "constructionYear": 2018,
        "airline": "Swiss",
        "seatCapacity": 180
    })
}

pub fn flight_body(airplane_id: i64) -> Value {
    json!({
        "airplaneId": airplane_id,
        "origin": "ZRH",
        "destination": "LHR",
        "departure": "2025-03-01T07:30:00",
        "arrival": "2025-03-01T08:40:00"
    })
}

pub fn passenger_body() -> Value {
    json!({
        "lastname": "Muster",
        "firstname": "Max",
        "age": 34,
        "nationality": "CH"
    })
}

pub fn booking_body(passenger_id: i64, flight_id: i64) -> Value {
    json!({
        "passengerId": passenger_id,
        "origin": "ZRH",
        "destination": "LHR",
        "departure": "2025-03-01T07:30:00",
        "arrival": "2025-03-01T08:40:00",
        "firstFlightId": flight_id,
        "bookingDate": "2025-01-15T12:00:00"
    })
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

pub async fn create_test_airplane(db: &InMemoryDb) -> i64 {
    AirplaneRepository::create(
        db,
        NewAirplane {
            brand: "Boeing".to_string(),
            model: "737".to_string(),
            construction_year: 2010,
            airline: "Edelweiss".to_string(),
            seat_capacity: 160,
            created_by: "admin".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn create_test_flight(db: &InMemoryDb, airplane_id: i64) -> i64 {
    FlightRepository::create(
        db,
        NewFlight {
            airplane_id,
            origin: "ZRH".to_string(),
            destination: "LHR".to_string(),
            departure: at(1, 7),
            arrival: at(1, 9),
            created_by: "admin".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn create_test_passenger(db: &InMemoryDb, owner: &str) -> i64 {
    PassengerRepository::create(
        db,
        NewPassenger {
            lastname: "Muster".to_string(),
            firstname: "Erika".to_string(),
            age: 41,
            nationality: "DE".to_string(),
            created_by: owner.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn create_test_booking(db: &InMemoryDb, owner: &str) -> i64 {
    let airplane_id = create_test_airplane(db).await;
    let flight_id = create_test_flight(db, airplane_id).await;
    let passenger_id = create_test_passenger(db, owner).await;

    BookingRepository::create(
        db,
        NewBooking {
            passenger_id,
            origin: "ZRH".to_string(),
            destination: "LHR".to_string(),
            departure: at(1, 7),
            arrival: at(1, 9),
            first_flight_id: flight_id,
            second_flight_id: None,
            third_flight_id: None,
            booking_date: at(1, 1),
            created_by: owner.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}
