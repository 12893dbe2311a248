//! DTOs for booking endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{Booking, NewBooking, UpdateBooking};

/// Booking fields sent by users.
///
/// Up to three flight legs are referenced by id; only the first is required.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[schema(example = 1)]
    pub passenger_id: i64,

    #[validate(length(min = 1, max = 100))]
    #[schema(example = "ZRH")]
    pub origin: String,

    #[validate(length(min = 1, max = 100))]
    #[schema(example = "JFK")]
    pub destination: String,

    #[schema(value_type = String, example = "2025-03-01T07:30:00")]
    pub departure: NaiveDateTime,

    #[schema(value_type = String, example = "2025-03-01T18:05:00")]
    pub arrival: NaiveDateTime,

    #[schema(example = 10)]
    pub first_flight_id: i64,

    #[serde(default)]
    pub second_flight_id: Option<i64>,

    #[serde(default)]
    pub third_flight_id: Option<i64>,

    #[schema(value_type = String, example = "2025-01-15T12:00:00")]
    pub booking_date: NaiveDateTime,
}

impl BookingRequest {
    pub fn into_new(self, created_by: String) -> NewBooking {
        NewBooking {
            passenger_id: self.passenger_id,
            origin: self.origin,
            destination: self.destination,
            departure: self.departure,
            arrival: self.arrival,
            first_flight_id: self.first_flight_id,
            second_flight_id: self.second_flight_id,
            third_flight_id: self.third_flight_id,
            booking_date: self.booking_date,
            created_by,
        }
    }

    /// Update that keeps the current owner, or reassigns to `created_by`.
    pub fn into_update(self, created_by: Option<String>) -> UpdateBooking {
        UpdateBooking {
            passenger_id: self.passenger_id,
            origin: self.origin,
            destination: self.destination,
            departure: self.departure,
            arrival: self.arrival,
            first_flight_id: self.first_flight_id,
            second_flight_id: self.second_flight_id,
            third_flight_id: self.third_flight_id,
            booking_date: self.booking_date,
            created_by,
        }
    }
}

/// Booking fields sent by administrators, including the owner.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookingRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub booking: BookingRequest,

    #[validate(length(min = 1, max = 255))]
    #[schema(example = "alice")]
    pub created_by: String,
}

/// Booking as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: i64,
    pub passenger_id: i64,
    pub origin: String,
    pub destination: String,
    #[schema(value_type = String)]
    pub departure: NaiveDateTime,
    #[schema(value_type = String)]
    pub arrival: NaiveDateTime,
    pub first_flight_id: i64,
    pub second_flight_id: Option<i64>,
    pub third_flight_id: Option<i64>,
    #[schema(value_type = String)]
    pub booking_date: NaiveDateTime,
    pub created_by: String,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            passenger_id: b.passenger_id,
            origin: b.origin,
            destination: b.destination,
            departure: b.departure,
            arrival: b.arrival,
            first_flight_id: b.first_flight_id,
            second_flight_id: b.second_flight_id,
            third_flight_id: b.third_flight_id,
            booking_date: b.booking_date,
            created_by: b.created_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> serde_json::Value {
        json!({
            "passengerId": 1,
            "origin": "ZRH",
            "destination": "JFK",
            "departure": "2025-03-01T07:30:00",
            "arrival": "2025-03-01T18:05:00",
            "firstFlightId": 10,
            "bookingDate": "2025-01-15T12:00:00"
        })
    }

    #[test]
    fn test_optional_legs_default_to_none() {
        let req: BookingRequest = serde_json::from_value(body()).unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.second_flight_id, None);
        assert_eq!(req.third_flight_id, None);
    }

    #[test]
    fn test_admin_request_validates_nested_fields() {
        let mut raw = body();
        raw["origin"] = json!("");
        raw["createdBy"] = json!("bob");

        let req: AdminBookingRequest = serde_json::from_value(raw).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_serializes_null_legs() {
        let req: BookingRequest = serde_json::from_value(body()).unwrap();
        let new = req.into_new("alice".to_string());
        let response = BookingResponse::from(Booking {
            id: 5,
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
        });

        let value = serde_json::to_value(response).unwrap();

        assert_eq!(value["firstFlightId"], 10);
        assert!(value["secondFlightId"].is_null());
        assert_eq!(value["bookingDate"], "2025-01-15T12:00:00");
    }
}
