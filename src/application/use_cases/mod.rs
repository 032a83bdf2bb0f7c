//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod lookups;

pub use lookups::{
    CreateEntryUseCase, DeleteEntryUseCase, GetEntryByIdUseCase, ListEntriesUseCase,
    UpdateEntryUseCase,
};
