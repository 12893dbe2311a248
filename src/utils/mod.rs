//! Small helpers shared across layers.
//!
//! - [`db_error`] - Classification of database integrity violations

pub mod db_error;
