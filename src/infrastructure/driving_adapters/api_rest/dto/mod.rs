//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod lookup;

pub use lookup::{LookupResponseDto, NamePayloadDto};
