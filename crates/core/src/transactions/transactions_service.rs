use log::debug;
use std::sync::Arc;

use super::transactions_constants::{is_valid_category, ALLOWED_CATEGORIES};
use super::transactions_model::{
    parse_tanggal, NewTransaction, Transaction, TransactionData, TransactionType,
    TransactionUpdate,
};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for managing income and expense transactions.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Checks the category rule for the given type: required and allowed for
    /// expenses, forced empty for income.
    fn resolve_kategori(tipe: TransactionType, kategori: &str) -> Result<String> {
        match tipe {
            TransactionType::Pengeluaran => {
                if kategori.is_empty() {
                    return Err(ValidationError::MissingField("kategori".to_string()).into());
                }
                if !is_valid_category(kategori) {
                    return Err(ValidationError::InvalidCategory(kategori.to_string()).into());
                }
                Ok(kategori.to_string())
            }
            TransactionType::Pemasukan => Ok(String::new()),
        }
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(
        &self,
        user_id: &str,
        input: NewTransaction,
    ) -> Result<Transaction> {
        if input.nominal <= 0.0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        let kategori = Self::resolve_kategori(input.tipe, &input.kategori)?;
        let tanggal = parse_tanggal(&input.tanggal)?;

        debug!(
            "Creating {} transaction of {} for user {}",
            input.tipe.as_str(),
            input.nominal,
            user_id
        );

        self.repository
            .insert(
                user_id,
                TransactionData {
                    tipe: input.tipe,
                    nominal: input.nominal,
                    kategori,
                    catatan: input.catatan,
                    tanggal,
                },
            )
            .await
    }

    async fn list_transactions(
        &self,
        user_id: &str,
        tipe: Option<TransactionType>,
    ) -> Result<Vec<Transaction>> {
        self.repository.list_for_user(user_id, tipe).await
    }

    async fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction> {
        self.repository
            .get_by_id(user_id, transaction_id)
            .await?
            .ok_or_else(|| Error::NotFound("Transaksi".to_string()))
    }

    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        let existing = self.get_transaction(user_id, transaction_id).await?;

        let tipe = update.tipe.unwrap_or(existing.tipe);

        let nominal = match update.nominal {
            Some(n) if n <= 0.0 => return Err(ValidationError::NonPositiveAmount.into()),
            Some(n) => n,
            None => existing.nominal,
        };

        // The category to validate is the incoming one when provided,
        // otherwise whatever the transaction already carries.
        let kategori = update.kategori.unwrap_or(existing.kategori);
        let kategori = Self::resolve_kategori(tipe, &kategori)?;

        let catatan = update.catatan.unwrap_or(existing.catatan);

        let tanggal = match update.tanggal {
            Some(value) => parse_tanggal(&value)?,
            None => existing.tanggal,
        };

        self.repository
            .update(
                user_id,
                transaction_id,
                TransactionData {
                    tipe,
                    nominal,
                    kategori,
                    catatan,
                    tanggal,
                },
            )
            .await
    }

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()> {
        let deleted = self.repository.delete(user_id, transaction_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound("Transaksi".to_string()));
        }
        Ok(())
    }
}

/// Returns the fixed list of allowed expense categories.
pub fn allowed_categories() -> Vec<String> {
    ALLOWED_CATEGORIES.iter().map(|c| c.to_string()).collect()
}
