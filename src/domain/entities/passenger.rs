//! Domain entity representing a passenger.

/// A traveller registered by a user.
///
/// The passenger belongs to the user named in `created_by`; user endpoints
/// only ever see their own passengers.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub id: i64,
    pub lastname: String,
    pub firstname: String,
    pub age: i32,
    pub nationality: String,
    pub created_by: String,
}

/// Input data for registering a new passenger.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPassenger {
    pub lastname: String,
    pub firstname: String,
    pub age: i32,
    pub nationality: String,
    pub created_by: String,
}

/// Replacement values for a passenger.
///
/// `created_by: None` keeps the current owner. Only administrators reassign
/// passengers to another owner.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePassenger {
    pub lastname: String,
    pub firstname: String,
    pub age: i32,
    pub nationality: String,
    pub created_by: Option<String>,
}
