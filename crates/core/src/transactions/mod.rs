//! Transactions module - domain models, services, and traits.

mod transactions_constants;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod transactions_model_tests;

// Re-export the public interface
pub use transactions_constants::{is_valid_category, ALLOWED_CATEGORIES, DATE_FORMAT};
pub use transactions_model::{
    parse_tanggal, NewTransaction, Transaction, TransactionData, TransactionType,
    TransactionUpdate,
};
pub use transactions_service::{allowed_categories, TransactionService};
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
