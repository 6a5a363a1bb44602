//! Financial goal domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a savings goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialGoal {
    pub id: String,
    pub user_id: String,
    pub nama: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FinancialGoal {
    /// Progress towards the target, clamped to [0, 100] percent.
    ///
    /// A zero target yields 0 rather than a division by zero.
    pub fn progress_percentage(&self) -> f64 {
        if self.target_amount == 0.0 {
            return 0.0;
        }
        let percentage = (self.current_amount / self.target_amount) * 100.0;
        percentage.min(100.0)
    }
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    pub nama: String,
    pub target_amount: f64,
}

/// Input model for partially updating a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalUpdate {
    pub nama: Option<String>,
    pub target_amount: Option<f64>,
}

/// A goal together with its derived progress, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalWithProgress {
    #[serde(flatten)]
    pub goal: FinancialGoal,
    pub progress_percentage: f64,
}

impl From<FinancialGoal> for GoalWithProgress {
    fn from(goal: FinancialGoal) -> Self {
        let progress_percentage = goal.progress_percentage();
        Self {
            goal,
            progress_percentage,
        }
    }
}
