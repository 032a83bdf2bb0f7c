//! Lookup Entry Domain Model
//!
//! Represents a single role or user status record.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::models::entity_kind::EntityKind;
use crate::shared::errors::DomainError;

/// Newtype wrapper for a database-assigned entry ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(i64);

impl EntityId {
    /// Wrap a raw database ID
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying integer value
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A validated entry name: trimmed and never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

/// Byte order mark, which `char::is_whitespace` does not cover
const BYTE_ORDER_MARK: char = '\u{feff}';

impl EntityName {
    /// Strip leading and trailing whitespace, including byte order marks
    #[must_use]
    pub fn trim(raw: &str) -> &str {
        raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
    }

    /// Trim `raw` and reject it if nothing is left
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NameRequired` if `raw` is empty or whitespace-only.
    pub fn parse(kind: EntityKind, raw: &str) -> Result<Self, DomainError> {
        let trimmed = Self::trim(raw);
        if trimmed.is_empty() {
            return Err(DomainError::NameRequired(kind));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A persisted role or user status
#[derive(Debug, Clone, PartialEq)]
pub struct LookupEntry {
    id: EntityId,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl LookupEntry {
    /// Restore an entry from persisted data
    #[must_use]
    pub fn restore(
        id: EntityId,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }

    /// Replace the name, keeping the id and creation time
    #[must_use]
    pub fn renamed(self, name: &EntityName) -> Self {
        Self {
            name: name.as_str().to_string(),
            updated_at: Utc::now(),
            ..self
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
