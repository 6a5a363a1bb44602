//! Transaction domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::transactions_constants::DATE_FORMAT;
use crate::errors::{Result, ValidationError};

/// Classification of a transaction. Controls whether a category is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Income
    Pemasukan,
    /// Expense
    Pengeluaran,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Pemasukan => "pemasukan",
            TransactionType::Pengeluaran => "pengeluaran",
        }
    }
}

/// Domain model representing a single income or expense transaction.
///
/// `kategori` is non-empty only for expense transactions; income
/// transactions always carry an empty category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub tipe: TransactionType,
    pub nominal: f64,
    pub kategori: String,
    pub catatan: String,
    pub tanggal: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new transaction.
///
/// The date arrives as a string so that the strict `YYYY-MM-DD` format can
/// be enforced rather than silently coerced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub tipe: TransactionType,
    pub nominal: f64,
    #[serde(default)]
    pub kategori: String,
    #[serde(default)]
    pub catatan: String,
    pub tanggal: String,
}

/// Input model for partially updating a transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionUpdate {
    pub tipe: Option<TransactionType>,
    pub nominal: Option<f64>,
    pub kategori: Option<String>,
    pub catatan: Option<String>,
    pub tanggal: Option<String>,
}

/// Validated transaction content, produced by the service layer and
/// persisted by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionData {
    pub tipe: TransactionType,
    pub nominal: f64,
    pub kategori: String,
    pub catatan: String,
    pub tanggal: NaiveDate,
}

/// Parses a transaction date, accepting only the `YYYY-MM-DD` format.
///
/// chrono's `%Y-%m-%d` also accepts unpadded months and days, so the input
/// must additionally match the canonical rendering of the parsed date.
pub fn parse_tanggal(value: &str) -> Result<NaiveDate> {
    let date =
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate)?;
    if value != date.format(DATE_FORMAT).to_string() {
        return Err(ValidationError::InvalidDate.into());
    }
    Ok(date)
}
