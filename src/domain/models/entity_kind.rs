//! Entity Kind
//!
//! Discriminates the lookup tables served by the registry.

use std::fmt;

/// The lookup entity types exposed by the API.
///
/// Both kinds share the same shape (`id`, `name`, timestamps); the kind
/// selects the backing table and the wording used in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Role,
    UserStatus,
}

impl EntityKind {
    /// Human-readable singular label, e.g. `"User status"`
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Role => "Role",
            Self::UserStatus => "User status",
        }
    }

    /// Human-readable plural label, e.g. `"User statuses"`
    #[must_use]
    pub fn plural_label(self) -> &'static str {
        match self {
            Self::Role => "Roles",
            Self::UserStatus => "User statuses",
        }
    }

    /// Backing table name
    #[must_use]
    pub fn table(self) -> &'static str {
        match self {
            Self::Role => "roles",
            Self::UserStatus => "user_statuses",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
