//! Document models for financial goals.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use dompetku_core::goals::FinancialGoal;

/// Stored document for a savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub nama: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

// Conversion to the domain model
impl From<GoalDocument> for FinancialGoal {
    fn from(doc: GoalDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            user_id: doc.user_id.to_hex(),
            nama: doc.nama,
            target_amount: doc.target_amount,
            current_amount: doc.current_amount,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}
