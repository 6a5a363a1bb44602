//! DompetKu Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for DompetKu.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-mongo` crate.

pub mod errors;
pub mod goals;
pub mod stats;
pub mod transactions;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
