//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration
//! - Connection pool and migrations

pub mod config;
pub mod database;
pub mod lookup_repository;

pub use config::AppConfig;
pub use lookup_repository::PostgresLookupRepository;
