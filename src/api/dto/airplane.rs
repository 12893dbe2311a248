//! DTOs for airplane endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{Airplane, NewAirplane, UpdateAirplane};

/// Request body for creating or replacing an airplane.
///
/// The owner is taken from the authenticated principal; a `createdBy` field
/// in the body is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AirplaneRequest {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Airbus")]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    #[schema(example = "A320neo")]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    #[schema(example = 2018)]
    pub construction_year: i32,

    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Swiss")]
    pub airline: String,

    #[validate(range(min = 1, max = 1000))]
    #[schema(example = 180)]
    pub seat_capacity: i32,
}

impl AirplaneRequest {
    pub fn into_new(self, created_by: String) -> NewAirplane {
        NewAirplane {
            brand: self.brand,
            model: self.model,
            construction_year: self.construction_year,
            airline: self.airline,
            seat_capacity: self.seat_capacity,
            created_by,
        }
    }

    pub fn into_update(self) -> UpdateAirplane {
        UpdateAirplane {
            brand: self.brand,
            model: self.model,
            construction_year: self.construction_year,
            airline: self.airline,
            seat_capacity: self.seat_capacity,
        }
    }
}

/// Airplane as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AirplaneResponse {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub construction_year: i32,
    pub airline: String,
    pub seat_capacity: i32,
    pub created_by: String,
}

impl From<Airplane> for AirplaneResponse {
    fn from(a: Airplane) -> Self {
        Self {
            id: a.id,
            brand: a.brand,
            model: a.model,
            construction_year: a.construction_year,
            airline: a.airline,
            seat_capacity: a.seat_capacity,
            created_by: a.created_by,
        }
    }
}
