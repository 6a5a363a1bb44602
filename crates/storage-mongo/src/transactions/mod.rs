//! MongoDB storage implementation for transactions.

mod model;
mod repository;

pub use model::TransactionDocument;
pub use repository::{TransactionRepository, COLLECTION};
