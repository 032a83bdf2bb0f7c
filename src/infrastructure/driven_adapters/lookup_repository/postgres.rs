//! PostgreSQL Lookup Repository Implementation
//!
//! Implements the LookupRepository trait using SQLx for PostgreSQL. One
//! instance serves one table, selected by its `EntityKind`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::LookupRepository;
use crate::domain::models::{EntityId, EntityKind, EntityName, LookupEntry};
use crate::shared::errors::RepositoryError;

const ENTRY_COLUMNS: &str = "id, name, created_at, updated_at";

/// Database row representation shared by both lookup tables
#[derive(Debug, sqlx::FromRow)]
struct LookupRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LookupRow> for LookupEntry {
    fn from(row: LookupRow) -> Self {
        LookupEntry::restore(EntityId::new(row.id), row.name, row.created_at, row.updated_at)
    }
}

/// PostgreSQL implementation of LookupRepository
pub struct PostgresLookupRepository {
    pool: PgPool,
    kind: EntityKind,
}

impl PostgresLookupRepository {
    /// Create a repository bound to `kind`'s table
    #[must_use]
    pub fn new(pool: PgPool, kind: EntityKind) -> Self {
        Self { pool, kind }
    }

    fn table(&self) -> &'static str {
        self.kind.table()
    }
}

#[async_trait]
impl LookupRepository for PostgresLookupRepository {
    async fn create(&self, name: &EntityName) -> Result<LookupEntry, RepositoryError> {
        let query = format!(
            "INSERT INTO {} (name, created_at, updated_at) \
             VALUES ($1, NOW(), NOW()) \
             RETURNING {ENTRY_COLUMNS}",
            self.table()
        );

        let row = sqlx::query_as::<_, LookupRow>(&query)
            .bind(name.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_write(self.kind, e))?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<LookupEntry>, RepositoryError> {
        let query = format!("SELECT {ENTRY_COLUMNS} FROM {} ORDER BY id ASC", self.table());

        let rows = sqlx::query_as::<_, LookupRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(LookupEntry::from).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<LookupEntry>, RepositoryError> {
        let query = format!("SELECT {ENTRY_COLUMNS} FROM {} WHERE id = $1", self.table());

        let row = sqlx::query_as::<_, LookupRow>(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(LookupEntry::from))
    }

    async fn update(
        &self,
        id: EntityId,
        name: &EntityName,
    ) -> Result<Option<LookupEntry>, RepositoryError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let renamed = existing.renamed(name);

        let query = format!(
            "UPDATE {} SET name = $2, updated_at = $3 WHERE id = $1 RETURNING {ENTRY_COLUMNS}",
            self.table()
        );

        // Still optional: the row may have been deleted since the lookup
        let row = sqlx::query_as::<_, LookupRow>(&query)
            .bind(renamed.id().value())
            .bind(renamed.name())
            .bind(renamed.updated_at())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::from_write(self.kind, e))?;

        Ok(row.map(LookupEntry::from))
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let query = format!("DELETE FROM {} WHERE id = $1", self.table());
        let result = sqlx::query(&query)
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_name(
        &self,
        name: &EntityName,
        exclude_id: Option<EntityId>,
    ) -> Result<bool, RepositoryError> {
        let exists = match exclude_id {
            Some(id) => {
                let query = format!(
                    "SELECT EXISTS(SELECT 1 FROM {} WHERE name = $1 AND id != $2)",
                    self.table()
                );
                sqlx::query_scalar::<_, bool>(&query)
                    .bind(name.as_str())
                    .bind(id.value())
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                let query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE name = $1)", self.table());
                sqlx::query_scalar::<_, bool>(&query)
                    .bind(name.as_str())
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(exists)
    }
}
