//! Lookup Repository Gateway
//!
//! Abstract trait defining the contract for role and user status persistence.

use async_trait::async_trait;

use crate::domain::models::{EntityId, EntityName, LookupEntry};
use crate::shared::errors::RepositoryError;

/// Repository trait for a single lookup table
///
/// "Not found" is a normal outcome (`None` / `false`); only infrastructure
/// failures and constraint violations are reported as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LookupRepository: Send + Sync {
    /// Insert a new entry; the store assigns the ID
    async fn create(&self, name: &EntityName) -> Result<LookupEntry, RepositoryError>;

    /// List all entries, ordered by ID ascending
    async fn find_all(&self) -> Result<Vec<LookupEntry>, RepositoryError>;

    /// Find an entry by its ID
    async fn find_by_id(&self, id: EntityId) -> Result<Option<LookupEntry>, RepositoryError>;

    /// Replace the name of an existing entry
    async fn update(
        &self,
        id: EntityId,
        name: &EntityName,
    ) -> Result<Option<LookupEntry>, RepositoryError>;

    /// Hard delete an entry, returning whether it existed
    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError>;

    /// Check if a name is taken, optionally excluding a specific entry ID
    async fn exists_by_name(
        &self,
        name: &EntityName,
        exclude_id: Option<EntityId>,
    ) -> Result<bool, RepositoryError>;
}
