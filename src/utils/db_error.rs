//! Classification of integrity errors reported by PostgreSQL.

/// Integrity rule the storage engine refused a statement for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// Insert/update referenced a missing row, or delete left a dangling reference.
    ForeignKey { constraint: Option<String> },
    Unique { constraint: Option<String> },
    Check { constraint: Option<String> },
}

/// Returns the integrity rule behind `e`, or `None` for any other failure.
pub fn classify(e: &sqlx::Error) -> Option<IntegrityViolation> {
    let db_err = e.as_database_error()?;
    let constraint = db_err.constraint().map(str::to_string);

    if db_err.is_foreign_key_violation() {
        return Some(IntegrityViolation::ForeignKey { constraint });
    }

    if db_err.is_unique_violation() {
        return Some(IntegrityViolation::Unique { constraint });
    }

    if db_err.is_check_violation() {
        return Some(IntegrityViolation::Check { constraint });
    }

    None
}
