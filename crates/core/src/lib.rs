//! Core types and rules for mfr-recon
//!
//! Domain types shared by the storage, service and HTTP crates, plus the
//! pure rules (slug derivation, page arithmetic) every layer agrees on.

mod constants;
mod env_config;
mod manufacturer;
mod page;
mod slug;

pub use constants::*;
pub use env_config::*;
pub use manufacturer::*;
pub use page::*;
pub use slug::*;
