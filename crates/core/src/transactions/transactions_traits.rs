//! Transaction repository and service traits.
//!
//! These traits define the contract for transaction operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::transactions_model::{
    NewTransaction, Transaction, TransactionData, TransactionType, TransactionUpdate,
};
use crate::errors::Result;

/// Trait defining the contract for Transaction repository operations.
///
/// Every operation is scoped to one owning user; implementations must
/// include the owner in every filter so cross-user access is impossible.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Persists validated transaction content, assigning id and timestamps.
    async fn insert(&self, user_id: &str, data: TransactionData) -> Result<Transaction>;

    /// Lists the user's transactions, newest `tanggal` first, optionally
    /// filtered by type.
    async fn list_for_user(
        &self,
        user_id: &str,
        tipe: Option<TransactionType>,
    ) -> Result<Vec<Transaction>>;

    /// Retrieves one of the user's transactions by id.
    async fn get_by_id(&self, user_id: &str, transaction_id: &str) -> Result<Option<Transaction>>;

    /// Replaces the content of one of the user's transactions.
    async fn update(
        &self,
        user_id: &str,
        transaction_id: &str,
        data: TransactionData,
    ) -> Result<Transaction>;

    /// Deletes one of the user's transactions.
    ///
    /// Returns the number of deleted documents.
    async fn delete(&self, user_id: &str, transaction_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Transaction service operations.
///
/// The service layer owns input validation (amount, date format, category
/// rules) and maps missing records to not-found errors.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Validates and creates a new transaction.
    async fn create_transaction(
        &self,
        user_id: &str,
        input: NewTransaction,
    ) -> Result<Transaction>;

    /// Lists the user's transactions, optionally filtered by type.
    async fn list_transactions(
        &self,
        user_id: &str,
        tipe: Option<TransactionType>,
    ) -> Result<Vec<Transaction>>;

    /// Retrieves a single transaction owned by the user.
    async fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction>;

    /// Applies a partial update, re-validating the category and date rules.
    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction>;

    /// Deletes a transaction owned by the user.
    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()>;
}
