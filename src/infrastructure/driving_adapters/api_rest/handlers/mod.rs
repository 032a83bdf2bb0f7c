//! HTTP Handlers

pub mod lookups;
