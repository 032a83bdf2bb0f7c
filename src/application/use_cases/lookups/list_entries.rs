//! List Entries Use Case
//!
//! Retrieves every role or user status.

use std::sync::Arc;

use crate::domain::gateways::LookupRepository;
use crate::domain::models::{EntityKind, LookupEntry};
use crate::shared::errors::UseCaseError;

/// Use case for listing all entries
pub struct ListEntriesUseCase {
    kind: EntityKind,
    repository: Arc<dyn LookupRepository>,
}

impl ListEntriesUseCase {
    /// Create a new ListEntriesUseCase
    #[must_use]
    pub fn new(kind: EntityKind, repository: Arc<dyn LookupRepository>) -> Self {
        Self { kind, repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<LookupEntry>, UseCaseError> {
        tracing::info!(kind = %self.kind, "Fetching all entries");

        let entries = self.repository.find_all().await?;

        tracing::info!(kind = %self.kind, count = entries.len(), "Entries fetched successfully");
        Ok(entries)
    }
}
