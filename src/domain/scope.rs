//! Ownership filter for user-owned records.

/// Which records an operation may see.
///
/// Admin endpoints run with [`OwnerScope::Any`]; user endpoints run with
/// [`OwnerScope::Owner`] bound to the caller's principal name. A record
/// outside the scope behaves exactly like a missing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerScope {
    Any,
    Owner(String),
}

impl OwnerScope {
    /// Scope restricted to records created by `name`.
    pub fn owner(name: impl Into<String>) -> Self {
        Self::Owner(name.into())
    }

    /// Owner name to filter by, `None` when unrestricted.
    pub fn owner_name(&self) -> Option<&str> {
        match self {
            OwnerScope::Any => None,
            OwnerScope::Owner(name) => Some(name),
        }
    }

    /// Returns whether a record created by `created_by` is visible.
    pub fn permits(&self, created_by: &str) -> bool {
        self.owner_name().is_none_or(|owner| owner == created_by)
    }
}
