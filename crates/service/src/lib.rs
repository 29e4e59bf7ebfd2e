//! Service layer for mfr-recon
//!
//! Validates input and applies the reconciliation rules between the HTTP
//! handlers and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod alias_service;
mod error;
mod manufacturer_service;
mod validation;

pub use alias_service::AliasService;
pub use error::ServiceError;
pub use manufacturer_service::ManufacturerService;
pub use validation::require_fields;
