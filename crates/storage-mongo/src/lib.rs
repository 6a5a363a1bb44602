//! MongoDB storage implementation for DompetKu.
//!
//! This crate provides all database-related functionality using the official
//! MongoDB driver. It implements the repository traits defined in
//! `dompetku-core` and contains:
//! - Connection setup and index management
//! - Repository implementations for all domain entities
//! - Database-specific document types (with `ObjectId`/`bson::DateTime`)
//!
//! # Architecture
//!
//! This crate is the only place in the application where driver dependencies
//! exist. All other crates are database-agnostic and work with traits.
//! Documents are decoded into strongly-typed structs once, at this boundary;
//! no loosely-typed maps escape it.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!    storage-mongo (this crate)
//!              │
//!              ▼
//!          MongoDB
//! ```

pub mod db;
pub mod errors;

// Repository implementations
pub mod goals;
pub mod transactions;
pub mod users;

// Re-export database utilities
pub use db::{connect, parse_object_id, OP_TIMEOUT, PROFILE_OP_TIMEOUT};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from dompetku-core for convenience
pub use dompetku_core::errors::{DatabaseError, Error, Result};
