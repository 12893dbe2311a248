//! Domain entity representing a scheduled flight.

use chrono::NaiveDateTime;

/// A single leg between two airports flown by one airplane.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i64,
    pub airplane_id: i64,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub created_by: String,
}

/// Input data for scheduling a new flight.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFlight {
    pub airplane_id: i64,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub created_by: String,
}

/// Replacement values for the mutable flight fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFlight {
    pub airplane_id: i64,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
}
