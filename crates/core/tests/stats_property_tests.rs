//! Property-based tests for the aggregation engine.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{NaiveDate, Utc};
use dompetku_core::goals::FinancialGoal;
use dompetku_core::stats::{ExpenseByCategory, IncomeVsExpense, Summary};
use dompetku_core::transactions::{Transaction, TransactionType, ALLOWED_CATEGORIES};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// Generates a random allowed category label.
fn arb_kategori() -> impl Strategy<Value = String> {
    (0..ALLOWED_CATEGORIES.len()).prop_map(|i| ALLOWED_CATEGORIES[i].to_string())
}

/// Generates a random valid transaction (positive amount, valid category
/// rules for its type).
fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (any::<bool>(), 1.0f64..10_000_000.0, arb_kategori()).prop_map(
        |(is_income, nominal, kategori)| {
            let (tipe, kategori) = if is_income {
                (TransactionType::Pemasukan, String::new())
            } else {
                (TransactionType::Pengeluaran, kategori)
            };
            Transaction {
                id: "tx".to_string(),
                user_id: "user-1".to_string(),
                tipe,
                nominal,
                kategori,
                catatan: String::new(),
                tanggal: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }
        },
    )
}

fn arb_transactions(max_count: usize) -> impl Strategy<Value = Vec<Transaction>> {
    proptest::collection::vec(arb_transaction(), 0..=max_count)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// The balance always equals income minus expense.
    #[test]
    fn summary_balance_is_income_minus_expense(transactions in arb_transactions(50)) {
        let summary = Summary::from_transactions(&transactions);
        prop_assert!((summary.saldo - (summary.total_pemasukan - summary.total_pengeluaran)).abs() < 1e-6);
        prop_assert!(summary.total_pemasukan >= 0.0);
        prop_assert!(summary.total_pengeluaran >= 0.0);
    }

    /// Category percentages sum to 100 whenever anything was spent, and the
    /// category totals add up to the grand total.
    #[test]
    fn category_percentages_sum_to_100(transactions in arb_transactions(50)) {
        let result = ExpenseByCategory::from_transactions(&transactions);
        let total: f64 = result.categories.iter().map(|c| c.total).sum();
        prop_assert!((total - result.grand_total).abs() < 1e-6);
        if result.grand_total > 0.0 {
            let pct: f64 = result.categories.iter().map(|c| c.percentage).sum();
            prop_assert!((pct - 100.0).abs() < 1e-6);
        } else {
            prop_assert!(result.categories.is_empty());
        }
    }

    /// Category rows are ordered by total descending with name ascending as
    /// the tie-break.
    #[test]
    fn category_ordering_is_deterministic(transactions in arb_transactions(50)) {
        let result = ExpenseByCategory::from_transactions(&transactions);
        for pair in result.categories.windows(2) {
            prop_assert!(
                pair[0].total > pair[1].total
                    || (pair[0].total == pair[1].total && pair[0].kategori < pair[1].kategori)
            );
        }
    }

    /// Income and expense percentages sum to 100 whenever the combined total
    /// is positive; both are zero otherwise.
    #[test]
    fn income_vs_expense_percentages_sum_to_100(transactions in arb_transactions(50)) {
        let result = IncomeVsExpense::from_transactions(&transactions);
        let pct: f64 = result.data.iter().map(|r| r.percentage).sum();
        if result.grand_total > 0.0 {
            prop_assert!((pct - 100.0).abs() < 1e-6);
        } else {
            prop_assert_eq!(pct, 0.0);
        }
    }

    /// Goal progress is always within [0, 100].
    #[test]
    fn goal_progress_is_clamped(target in 0.0f64..10_000_000.0, current in 0.0f64..20_000_000.0) {
        let goal = FinancialGoal {
            id: "goal".to_string(),
            user_id: "user-1".to_string(),
            nama: "Liburan".to_string(),
            target_amount: target,
            current_amount: current,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let progress = goal.progress_percentage();
        prop_assert!((0.0..=100.0).contains(&progress));
        if target == 0.0 {
            prop_assert_eq!(progress, 0.0);
        } else if current >= target {
            prop_assert_eq!(progress, 100.0);
        } else {
            prop_assert!((progress - current / target * 100.0).abs() < 1e-9);
        }
    }
}
