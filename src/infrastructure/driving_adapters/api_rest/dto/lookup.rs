//! Lookup DTOs
//!
//! Data transfer objects shared by the `/roles` and `/user-statuses` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::models::{EntityKind, EntityName, LookupEntry};
use crate::shared::errors::DomainError;

const NAME_NOT_STRING: &str = "name_not_string";
const NAME_REQUIRED: &str = "name_required";

/// Checks the raw `name` value: it must be a JSON string with visible content
///
/// Numbers and booleans are rejected rather than coerced.
fn validate_name_value(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(raw) if EntityName::trim(raw).is_empty() => Err(ValidationError::new(NAME_REQUIRED)),
        Value::String(_) => Ok(()),
        _ => Err(ValidationError::new(NAME_NOT_STRING)),
    }
}

/// DTO for creating or renaming an entry (POST and PUT)
///
/// `name` is kept as a raw JSON value so that a wrong type is reported as a
/// validation failure instead of a deserialization error. A missing `name`
/// deserializes to `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NamePayloadDto {
    #[serde(default)]
    #[validate(custom(function = "validate_name_value"))]
    pub name: Value,
}

impl NamePayloadDto {
    /// Apply the field rules in order and return the trimmed name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NameNotString` or `DomainError::NameRequired`,
    /// worded for `kind`.
    pub fn into_name(self, kind: EntityKind) -> Result<EntityName, DomainError> {
        if let Err(errors) = self.validate() {
            return Err(first_violation(kind, &errors));
        }

        match self.name {
            Value::String(raw) => EntityName::parse(kind, &raw),
            _ => Err(DomainError::NameNotString(kind)),
        }
    }
}

fn first_violation(kind: EntityKind, errors: &ValidationErrors) -> DomainError {
    let required = errors
        .field_errors()
        .get("name")
        .and_then(|field_errors| field_errors.first())
        .is_some_and(|error| error.code == NAME_REQUIRED);

    if required {
        DomainError::NameRequired(kind)
    } else {
        DomainError::NameNotString(kind)
    }
}

/// Entry response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponseDto {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LookupEntry> for LookupResponseDto {
    fn from(entry: LookupEntry) -> Self {
        Self {
            id: entry.id().value(),
            name: entry.name().to_string(),
            created_at: entry.created_at(),
            updated_at: entry.updated_at(),
        }
    }
}
