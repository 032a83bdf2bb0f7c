//! Delete Entry Use Case
//!
//! Hard deletes a role or user status.

use std::sync::Arc;

use crate::domain::gateways::LookupRepository;
use crate::domain::models::{EntityId, EntityKind};
use crate::shared::errors::UseCaseError;

/// Use case for deleting an entry
pub struct DeleteEntryUseCase {
    kind: EntityKind,
    repository: Arc<dyn LookupRepository>,
}

impl DeleteEntryUseCase {
    /// Create a new DeleteEntryUseCase
    #[must_use]
    pub fn new(kind: EntityKind, repository: Arc<dyn LookupRepository>) -> Self {
        Self { kind, repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the entry doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: EntityId) -> Result<(), UseCaseError> {
        tracing::info!(kind = %self.kind, entry_id = %id, "Deleting entry");

        let deleted = self.repository.delete(id).await?;

        if !deleted {
            tracing::warn!(kind = %self.kind, entry_id = %id, "Entry not found for deletion");
            return Err(UseCaseError::NotFound(self.kind));
        }

        tracing::info!(kind = %self.kind, entry_id = %id, "Entry deleted successfully");
        Ok(())
    }
}
