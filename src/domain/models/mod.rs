//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod entity_kind;
pub mod lookup_entry;

pub use entity_kind::EntityKind;
pub use lookup_entry::{EntityId, EntityName, LookupEntry};
