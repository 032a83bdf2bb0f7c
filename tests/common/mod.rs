//! Common test utilities for API tests
//!
//! Provides an in-memory `LookupRepository` that enforces the same unique
//! name constraint as the database, a router wired the same way as
//! `main.rs`, and a PostgreSQL container helper for the e2e suite.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use lookup_registry::domain::gateways::LookupRepository;
use lookup_registry::domain::models::{EntityId, EntityKind, EntityName, LookupEntry};
use lookup_registry::infrastructure::driven_adapters::database;
use lookup_registry::infrastructure::driven_adapters::lookup_repository::PostgresLookupRepository;
use lookup_registry::infrastructure::driving_adapters::api_rest::{build_app, App, AppState};
use lookup_registry::shared::errors::RepositoryError;

/// Message of the error the in-memory gateway raises when marked unavailable
pub const UNAVAILABLE_MESSAGE: &str = "connection refused";

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, LookupEntry>,
}

/// In-memory stand-in for one lookup table
pub struct InMemoryLookupRepository {
    kind: EntityKind,
    table: Mutex<Table>,
    unavailable: Mutex<bool>,
    stale_name_checks: Mutex<bool>,
}

impl InMemoryLookupRepository {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            table: Mutex::new(Table::default()),
            unavailable: Mutex::new(false),
            stale_name_checks: Mutex::new(false),
        }
    }

    /// Make every operation fail like a lost connection
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }

    /// Make `exists_by_name` always answer `false`, as if a concurrent
    /// request had not yet committed its row when the validator looked
    pub fn set_stale_name_checks(&self, stale: bool) {
        *self.stale_name_checks.lock().unwrap() = stale;
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if *self.unavailable.lock().unwrap() {
            return Err(RepositoryError::Database(sqlx::Error::Protocol(
                UNAVAILABLE_MESSAGE.to_string(),
            )));
        }
        Ok(())
    }

    fn name_taken(table: &Table, name: &EntityName, exclude_id: Option<EntityId>) -> bool {
        table
            .rows
            .values()
            .any(|row| row.name() == name.as_str() && Some(row.id()) != exclude_id)
    }
}

#[async_trait]
impl LookupRepository for InMemoryLookupRepository {
    async fn create(&self, name: &EntityName) -> Result<LookupEntry, RepositoryError> {
        self.check_available()?;
        let mut table = self.table.lock().unwrap();

        if Self::name_taken(&table, name, None) {
            return Err(RepositoryError::NameConflict(self.kind));
        }

        table.next_id += 1;
        let id = EntityId::new(table.next_id);
        let now = Utc::now();
        let entry = LookupEntry::restore(id, name.as_str().to_string(), now, now);
        table.rows.insert(id.value(), entry.clone());
        Ok(entry)
    }

    async fn find_all(&self) -> Result<Vec<LookupEntry>, RepositoryError> {
        self.check_available()?;
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<LookupEntry>, RepositoryError> {
        self.check_available()?;
        Ok(self.table.lock().unwrap().rows.get(&id.value()).cloned())
    }

    async fn update(
        &self,
        id: EntityId,
        name: &EntityName,
    ) -> Result<Option<LookupEntry>, RepositoryError> {
        self.check_available()?;
        let mut table = self.table.lock().unwrap();

        let Some(existing) = table.rows.get(&id.value()).cloned() else {
            return Ok(None);
        };
        if Self::name_taken(&table, name, Some(id)) {
            return Err(RepositoryError::NameConflict(self.kind));
        }

        let renamed = existing.renamed(name);
        table.rows.insert(id.value(), renamed.clone());
        Ok(Some(renamed))
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError> {
        self.check_available()?;
        Ok(self.table.lock().unwrap().rows.remove(&id.value()).is_some())
    }

    async fn exists_by_name(
        &self,
        name: &EntityName,
        exclude_id: Option<EntityId>,
    ) -> Result<bool, RepositoryError> {
        self.check_available()?;
        if *self.stale_name_checks.lock().unwrap() {
            return Ok(false);
        }
        Ok(Self::name_taken(&self.table.lock().unwrap(), name, exclude_id))
    }
}

/// Test application backed by in-memory repositories
pub struct TestApp {
    pub router: App,
    pub roles: Arc<InMemoryLookupRepository>,
    pub user_statuses: Arc<InMemoryLookupRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let roles = Arc::new(InMemoryLookupRepository::new(EntityKind::Role));
        let user_statuses = Arc::new(InMemoryLookupRepository::new(EntityKind::UserStatus));

        let router = build_app(AppState::new(roles.clone(), user_statuses.clone()));

        Self {
            router,
            roles,
            user_statuses,
        }
    }
}

/// A decoded HTTP response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `Value::Null` when the body is empty
    pub body: Value,
}

/// Send a JSON request through `router` and decode the JSON body
pub async fn send(router: &App, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let body = body.map_or_else(Body::empty, |json| Body::from(json.to_string()));
    send_raw(router, method, uri, body).await
}

/// Send `body` as-is with a JSON content type and decode the JSON body
pub async fn send_raw(router: &App, method: Method, uri: &str, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Entry payload inside a success envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TestResponse {
    /// Decode `data` as a single entry
    pub fn entry(&self) -> EntryResponse {
        serde_json::from_value(self.body["data"].clone()).unwrap()
    }

    /// Decode `data` as a list of entries
    pub fn entries(&self) -> Vec<EntryResponse> {
        serde_json::from_value(self.body["data"].clone()).unwrap()
    }

    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }

    pub fn envelope_status(&self) -> &str {
        self.body["status"].as_str().unwrap_or_default()
    }
}

/// Test application backed by a PostgreSQL container
pub struct PostgresTestApp {
    pub router: App,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl PostgresTestApp {
    /// Start a fresh PostgreSQL container and run migrations
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let roles = Arc::new(PostgresLookupRepository::new(pool.clone(), EntityKind::Role));
        let user_statuses = Arc::new(PostgresLookupRepository::new(
            pool.clone(),
            EntityKind::UserStatus,
        ));

        let router = build_app(AppState::new(roles, user_statuses));

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Remove every row, including seeded user statuses
    pub async fn clear_database(&self) {
        sqlx::query("TRUNCATE TABLE roles, user_statuses RESTART IDENTITY")
            .execute(&self.pool)
            .await
            .expect("Failed to truncate lookup tables");
    }
}
