//! Update Entry Use Case (PUT)
//!
//! Replaces the name of an existing role or user status. The ID never changes.

use std::sync::Arc;

use crate::domain::gateways::LookupRepository;
use crate::domain::models::{EntityId, EntityKind, EntityName, LookupEntry};
use crate::shared::errors::UseCaseError;

/// Use case for renaming an entry
pub struct UpdateEntryUseCase {
    kind: EntityKind,
    repository: Arc<dyn LookupRepository>,
}

impl UpdateEntryUseCase {
    /// Create a new UpdateEntryUseCase
    #[must_use]
    pub fn new(kind: EntityKind, repository: Arc<dyn LookupRepository>) -> Self {
        Self { kind, repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the entry doesn't exist.
    /// Returns `UseCaseError::Domain` if the storage unique index rejects the name.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: EntityId, name: EntityName) -> Result<LookupEntry, UseCaseError> {
        tracing::info!(kind = %self.kind, entry_id = %id, name = %name, "Updating entry");

        let updated = self.repository.update(id, &name).await?.ok_or_else(|| {
            tracing::warn!(kind = %self.kind, entry_id = %id, "Entry not found for update");
            UseCaseError::NotFound(self.kind)
        })?;

        tracing::info!(kind = %self.kind, entry_id = %id, "Entry updated successfully");
        Ok(updated)
    }
}
