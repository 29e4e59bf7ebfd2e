//! Storage backend trait abstraction
//!
//! Async domain traits for the two reconciliation tables. Each mutation
//! returns the number of rows it touched; zero is not an error.

pub mod alias;
pub mod manufacturer;

pub use alias::AliasStore;
pub use manufacturer::ManufacturerStore;
