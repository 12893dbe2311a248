//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization with camelCase
//! field names, validator for input validation and utoipa for the OpenAPI
//! schema. Related records are referenced by id.

pub mod airplane;
pub mod booking;
pub mod flight;
pub mod health;
pub mod passenger;
