//! Get Entry By ID Use Case
//!
//! Retrieves a single role or user status by its ID.

use std::sync::Arc;

use crate::domain::gateways::LookupRepository;
use crate::domain::models::{EntityId, EntityKind, LookupEntry};
use crate::shared::errors::UseCaseError;

/// Use case for getting an entry by ID
pub struct GetEntryByIdUseCase {
    kind: EntityKind,
    repository: Arc<dyn LookupRepository>,
}

impl GetEntryByIdUseCase {
    /// Create a new GetEntryByIdUseCase
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
    pub async fn execute(&self, id: EntityId) -> Result<LookupEntry, UseCaseError> {
        tracing::debug!(kind = %self.kind, entry_id = %id, "Getting entry by ID");

        let entry = self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(kind = %self.kind, entry_id = %id, "Entry not found");
            UseCaseError::NotFound(self.kind)
        })?;

        tracing::debug!(kind = %self.kind, entry_id = %id, "Entry found");
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::lookup_repository::MockLookupRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn should_return_entry_when_found() {
        let now = Utc::now();
        let mut repo = MockLookupRepository::new();
        repo.expect_find_by_id()
            .with(eq(EntityId::new(7)))
            .returning(move |id| Ok(Some(LookupEntry::restore(id, "tester".to_string(), now, now))));

        let use_case = GetEntryByIdUseCase::new(EntityKind::Role, Arc::new(repo));
        let entry = use_case.execute(EntityId::new(7)).await.unwrap();

        assert_eq!(entry.id(), EntityId::new(7));
        assert_eq!(entry.name(), "tester");
    }

    #[tokio::test]
    async fn should_return_not_found_on_every_call() {
        let mut repo = MockLookupRepository::new();
        repo.expect_find_by_id().times(3).returning(|_| Ok(None));

        let use_case = GetEntryByIdUseCase::new(EntityKind::UserStatus, Arc::new(repo));
        for _ in 0..3 {
            let err = use_case.execute(EntityId::new(999)).await.unwrap_err();
            assert!(matches!(err, UseCaseError::NotFound(EntityKind::UserStatus)));
            assert_eq!(err.to_string(), "User status not found");
        }
    }
}
