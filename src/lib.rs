//! Lookup Registry API
//!
//! A Rust-based microservice exposing CRUD endpoints for roles and user
//! statuses, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
