//! Storage layer for mfr-recon
//!
//! PostgreSQL-backed persistence for the `manufacturers` and
//! `supplier_manufacturers` tables, behind async store traits.

mod backend;
pub mod error;
#[cfg(feature = "memory")]
mod memory;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(feature = "memory")]
pub use memory::MemoryStorage;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
