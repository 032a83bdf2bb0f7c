//! Create Entry Use Case
//!
//! Creates a new role or user status.

use std::sync::Arc;

use crate::domain::gateways::LookupRepository;
use crate::domain::models::{EntityKind, EntityName, LookupEntry};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new entry
pub struct CreateEntryUseCase {
    kind: EntityKind,
    repository: Arc<dyn LookupRepository>,
}

impl CreateEntryUseCase {
    /// Create a new CreateEntryUseCase
    #[must_use]
    pub fn new(kind: EntityKind, repository: Arc<dyn LookupRepository>) -> Self {
        Self { kind, repository }
    }

    /// Execute the use case
    ///
    /// The name must already have passed the boundary validator.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the storage unique index rejects the name.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, name: EntityName) -> Result<LookupEntry, UseCaseError> {
        tracing::info!(kind = %self.kind, name = %name, "Creating new entry");

        let created = self.repository.create(&name).await.map_err(|e| {
            tracing::warn!(kind = %self.kind, name = %name, error = %e, "Failed to create entry");
            UseCaseError::from(e)
        })?;

        tracing::info!(
            kind = %self.kind,
            entry_id = %created.id(),
            name = created.name(),
            "Entry created successfully"
        );

        Ok(created)
    }
}
