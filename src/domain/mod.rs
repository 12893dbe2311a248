//! Domain layer containing business entities and contracts.
//!
//! Independent of infrastructure and presentation concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`scope`] - Ownership filter shared by the admin and user flows
//! - [`principal`] - Authenticated caller and role model
//!
//! # Design Principles
//!
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business rules live in services (see [`crate::application::services`])

pub mod entities;
pub mod principal;
pub mod repositories;
pub mod scope;
