//! Domain entity representing a booking.

use chrono::NaiveDateTime;

/// A passenger's itinerary made of one to three flights.
///
/// `first_flight_id` is mandatory; the second and third legs are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub passenger_id: i64,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub first_flight_id: i64,
    pub second_flight_id: Option<i64>,
    pub third_flight_id: Option<i64>,
    pub booking_date: NaiveDateTime,
    pub created_by: String,
}

impl Booking {
    /// Flight ids of the itinerary in travel order.
    pub fn flight_ids(&self) -> Vec<i64> {
        std::iter::once(self.first_flight_id)
            .chain(self.second_flight_id)
            .chain(self.third_flight_id)
            .collect()
    }
}

/// Input data for creating a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub passenger_id: i64,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub first_flight_id: i64,
    pub second_flight_id: Option<i64>,
    pub third_flight_id: Option<i64>,
    pub booking_date: NaiveDateTime,
    pub created_by: String,
}

/// Replacement values for a booking.
///
/// `created_by: None` keeps the current owner.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBooking {
    pub passenger_id: i64,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub first_flight_id: i64,
    pub second_flight_id: Option<i64>,
    pub third_flight_id: Option<i64>,
    pub booking_date: NaiveDateTime,
    pub created_by: Option<String>,
}
