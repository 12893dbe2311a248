//! Domain entity representing an airplane.

/// An aircraft that flights are scheduled on.
///
/// `created_by` records the administrator who registered the airplane and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Airplane {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub construction_year: i32,
    pub airline: String,
    pub seat_capacity: i32,
    pub created_by: String,
}

/// Input data for registering a new airplane.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAirplane {
    pub brand: String,
    pub model: String,
    pub construction_year: i32,
    pub airline: String,
    pub seat_capacity: i32,
    pub created_by: String,
}

/// Replacement values for the mutable airplane fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAirplane {
    pub brand: String,
    pub model: String,
    pub construction_year: i32,
    pub airline: String,
    pub seat_capacity: i32,
}
