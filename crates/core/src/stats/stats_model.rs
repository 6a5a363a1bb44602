//! Statistics models and the pure aggregation functions behind them.
//!
//! Everything here is side-effect-free: the functions reduce a slice of
//! already-validated, already-owner-scoped transactions into derived views.
//! Division by zero is handled with explicit guards; the engine itself
//! cannot fail.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::transactions::{Transaction, TransactionType};

/// Per-user income/expense totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub saldo: f64,
    pub total_pemasukan: f64,
    pub total_pengeluaran: f64,
}

impl Summary {
    /// Sums income and expenses over the given transactions.
    ///
    /// An empty input yields all zeros.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut total_pemasukan = 0.0;
        let mut total_pengeluaran = 0.0;
        for t in transactions {
            match t.tipe {
                TransactionType::Pemasukan => total_pemasukan += t.nominal,
                TransactionType::Pengeluaran => total_pengeluaran += t.nominal,
            }
        }
        Summary {
            saldo: total_pemasukan - total_pengeluaran,
            total_pemasukan,
            total_pengeluaran,
        }
    }
}

/// One expense category's share of total spending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBreakdown {
    pub kategori: String,
    pub total: f64,
    pub count: usize,
    pub percentage: f64,
}

/// Expense totals grouped by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExpenseByCategory {
    pub categories: Vec<CategoryBreakdown>,
    pub grand_total: f64,
}

impl ExpenseByCategory {
    /// Groups expense transactions by category and computes each category's
    /// share of the overall spending.
    ///
    /// Categories are ordered by total descending; equal totals fall back to
    /// kategori ascending so the ordering is deterministic.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut by_category: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for t in transactions {
            if t.tipe == TransactionType::Pengeluaran {
                let entry = by_category.entry(t.kategori.as_str()).or_insert((0.0, 0));
                entry.0 += t.nominal;
                entry.1 += 1;
            }
        }

        let grand_total: f64 = by_category.values().map(|(total, _)| total).sum();

        let mut categories: Vec<CategoryBreakdown> = by_category
            .into_iter()
            .map(|(kategori, (total, count))| CategoryBreakdown {
                kategori: kategori.to_string(),
                total,
                count,
                percentage: if grand_total > 0.0 {
                    (total / grand_total) * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.kategori.cmp(&b.kategori))
        });

        ExpenseByCategory {
            categories,
            grand_total,
        }
    }
}

/// Income or expense share of the combined flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeBreakdown {
    pub tipe: TransactionType,
    pub total: f64,
    pub count: usize,
    pub percentage: f64,
}

/// Income versus expense comparison. Always two rows, income first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeVsExpense {
    pub data: Vec<TypeBreakdown>,
    pub grand_total: f64,
}

impl IncomeVsExpense {
    /// Splits the transactions into income and expense totals with each
    /// side's percentage of the combined amount.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut pemasukan = (0.0, 0usize);
        let mut pengeluaran = (0.0, 0usize);
        for t in transactions {
            match t.tipe {
                TransactionType::Pemasukan => {
                    pemasukan.0 += t.nominal;
                    pemasukan.1 += 1;
                }
                TransactionType::Pengeluaran => {
                    pengeluaran.0 += t.nominal;
                    pengeluaran.1 += 1;
                }
            }
        }

        let grand_total = pemasukan.0 + pengeluaran.0;
        let share = |total: f64| {
            if grand_total > 0.0 {
                (total / grand_total) * 100.0
            } else {
                0.0
            }
        };

        IncomeVsExpense {
            data: vec![
                TypeBreakdown {
                    tipe: TransactionType::Pemasukan,
                    total: pemasukan.0,
                    count: pemasukan.1,
                    percentage: share(pemasukan.0),
                },
                TypeBreakdown {
                    tipe: TransactionType::Pengeluaran,
                    total: pengeluaran.0,
                    count: pengeluaran.1,
                    percentage: share(pengeluaran.0),
                },
            ],
            grand_total,
        }
    }
}
