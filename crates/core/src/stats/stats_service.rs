use log::debug;
use std::sync::Arc;

use super::stats_model::{ExpenseByCategory, IncomeVsExpense, Summary};
use crate::errors::Result;
use crate::transactions::{TransactionRepositoryTrait, TransactionType};

/// Trait defining the contract for statistics operations.
#[async_trait::async_trait]
pub trait StatsServiceTrait: Send + Sync {
    /// Income/expense totals and balance for the user.
    async fn get_summary(&self, user_id: &str) -> Result<Summary>;

    /// Spending grouped by category for the user.
    async fn get_expense_by_category(&self, user_id: &str) -> Result<ExpenseByCategory>;

    /// Income versus expense shares for the user.
    async fn get_income_vs_expense(&self, user_id: &str) -> Result<IncomeVsExpense>;
}

/// Service computing derived statistics over a user's transactions.
///
/// Transactions are fetched once per request as strongly-typed records and
/// reduced in-process by the pure functions in `stats_model`.
pub struct StatsService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl StatsService {
    /// Creates a new StatsService instance
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

#[async_trait::async_trait]
impl StatsServiceTrait for StatsService {
    async fn get_summary(&self, user_id: &str) -> Result<Summary> {
        debug!("Computing summary for user {}", user_id);
        let transactions = self
            .transaction_repository
            .list_for_user(user_id, None)
            .await?;
        Ok(Summary::from_transactions(&transactions))
    }

    async fn get_expense_by_category(&self, user_id: &str) -> Result<ExpenseByCategory> {
        let transactions = self
            .transaction_repository
            .list_for_user(user_id, Some(TransactionType::Pengeluaran))
            .await?;
        Ok(ExpenseByCategory::from_transactions(&transactions))
    }

    async fn get_income_vs_expense(&self, user_id: &str) -> Result<IncomeVsExpense> {
        let transactions = self
            .transaction_repository
            .list_for_user(user_id, None)
            .await?;
        Ok(IncomeVsExpense::from_transactions(&transactions))
    }
}
