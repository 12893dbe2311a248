//! DTOs for passenger endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{NewPassenger, Passenger, UpdatePassenger};

/// Passenger fields sent by users.
///
/// The owner is always the authenticated principal.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PassengerRequest {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Muster")]
    pub lastname: String,

    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Max")]
    pub firstname: String,

    #[validate(range(min = 0, max = 999))]
    #[schema(example = 34)]
    pub age: i32,

    #[validate(length(min = 1, max = 50))]
    #[schema(example = "CH")]
    pub nationality: String,
}

impl PassengerRequest {
    pub fn into_new(self, created_by: String) -> NewPassenger {
        NewPassenger {
            lastname: self.lastname,
            firstname: self.firstname,
            age: self.age,
            nationality: self.nationality,
            created_by,
        }
    }

    /// Update that keeps the current owner, or reassigns to `created_by`.
    pub fn into_update(self, created_by: Option<String>) -> UpdatePassenger {
        UpdatePassenger {
            lastname: self.lastname,
            firstname: self.firstname,
            age: self.age,
            nationality: self.nationality,
            created_by,
        }
    }
}

/// Passenger fields sent by administrators, including the owner.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminPassengerRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub passenger: PassengerRequest,

    #[validate(length(min = 1, max = 255))]
    #[schema(example = "alice")]
    pub created_by: String,
}

/// Passenger as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PassengerResponse {
    pub id: i64,
    pub lastname: String,
    pub firstname: String,
    pub age: i32,
    pub nationality: String,
    pub created_by: String,
}

impl From<Passenger> for PassengerResponse {
    fn from(p: Passenger) -> Self {
        Self {
            id: p.id,
            lastname: p.lastname,
            firstname: p.firstname,
            age: p.age,
            nationality: p.nationality,
            created_by: p.created_by,
        }
    }
}
