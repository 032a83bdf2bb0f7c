//! Lookup Repository Adapters

mod postgres;

pub use postgres::PostgresLookupRepository;
