//! Document models for transactions.

use bson::oid::ObjectId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use dompetku_core::transactions::{Transaction, TransactionType};

/// Stored document for an income/expense transaction.
///
/// `tanggal` is stored as a BSON datetime at midnight UTC; only the calendar
/// date is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub tipe: TransactionType,
    pub nominal: f64,
    pub kategori: String,
    pub catatan: String,
    pub tanggal: bson::DateTime,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

/// Encodes a calendar date as the stored midnight-UTC datetime.
pub fn tanggal_to_bson(date: NaiveDate) -> bson::DateTime {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    bson::DateTime::from_chrono(midnight)
}

// Conversion to the domain model
impl From<TransactionDocument> for Transaction {
    fn from(doc: TransactionDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            user_id: doc.user_id.to_hex(),
            tipe: doc.tipe,
            nominal: doc.nominal,
            kategori: doc.kategori,
            catatan: doc.catatan,
            tanggal: doc.tanggal.to_chrono().date_naive(),
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}
