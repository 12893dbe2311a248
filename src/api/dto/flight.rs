//! DTOs for flight endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{Flight, NewFlight, UpdateFlight};

/// Request body for scheduling or replacing a flight.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightRequest {
    /// Id of an existing airplane.
    #[schema(example = 1)]
    pub airplane_id: i64,

    #[validate(length(min = 1, max = 100))]
    #[schema(example = "ZRH")]
    pub origin: String,

    #[validate(length(min = 1, max = 100))]
    #[schema(example = "LHR")]
    pub destination: String,

    #[schema(value_type = String, example = "2025-03-01T07:30:00")]
    pub departure: NaiveDateTime,

    #[schema(value_type = String, example = "2025-03-01T08:40:00")]
    pub arrival: NaiveDateTime,
}

impl FlightRequest {
    pub fn into_new(self, created_by: String) -> NewFlight {
        NewFlight {
            airplane_id: self.airplane_id,
            origin: self.origin,
            destination: self.destination,
            departure: self.departure,
            arrival: self.arrival,
            created_by,
        }
    }

    pub fn into_update(self) -> UpdateFlight {
        UpdateFlight {
            airplane_id: self.airplane_id,
            origin: self.origin,
            destination: self.destination,
            departure: self.departure,
            arrival: self.arrival,
        }
    }
}

/// Flight as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightResponse {
    pub id: i64,
    pub airplane_id: i64,
    pub origin: String,
    pub destination: String,
    #[schema(value_type = String, example = "2025-03-01T07:30:00")]
    pub departure: NaiveDateTime,
    #[schema(value_type = String, example = "2025-03-01T08:40:00")]
    pub arrival: NaiveDateTime,
    pub created_by: String,
}

impl From<Flight> for FlightResponse {
    fn from(f: Flight) -> Self {
        Self {
            id: f.id,
            airplane_id: f.airplane_id,
            origin: f.origin,
            destination: f.destination,
            departure: f.departure,
            arrival: f.arrival,
            created_by: f.created_by,
        }
    }
}
