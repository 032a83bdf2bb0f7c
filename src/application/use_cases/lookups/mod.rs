//! Lookup Use Cases
//!
//! Thin orchestration over the lookup repository for roles and user statuses.

mod create_entry;
mod delete_entry;
mod get_entry_by_id;
mod list_entries;
mod update_entry;

pub use create_entry::CreateEntryUseCase;
pub use delete_entry::DeleteEntryUseCase;
pub use get_entry_by_id::GetEntryByIdUseCase;
pub use list_entries::ListEntriesUseCase;
pub use update_entry::UpdateEntryUseCase;
