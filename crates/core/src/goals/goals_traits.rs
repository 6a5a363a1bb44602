//! Goal repository and service traits.

use async_trait::async_trait;

use super::goals_model::{FinancialGoal, GoalUpdate, GoalWithProgress, NewGoal};
use crate::errors::Result;

/// Changes applied to a stored goal. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct GoalChanges {
    pub nama: Option<String>,
    pub target_amount: Option<f64>,
}

/// Trait defining the contract for FinancialGoal repository operations.
///
/// Every operation is scoped to one owning user; implementations must
/// include the owner in every filter.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Persists a new goal with `current_amount` starting at zero.
    async fn insert(&self, user_id: &str, new_goal: NewGoal) -> Result<FinancialGoal>;

    /// Lists the user's goals, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<FinancialGoal>>;

    /// Retrieves one of the user's goals by id.
    async fn get_by_id(&self, user_id: &str, goal_id: &str) -> Result<Option<FinancialGoal>>;

    /// Applies name/target changes to one of the user's goals.
    async fn update(
        &self,
        user_id: &str,
        goal_id: &str,
        changes: GoalChanges,
    ) -> Result<FinancialGoal>;

    /// Sets the saved amount on one of the user's goals.
    async fn set_current_amount(
        &self,
        user_id: &str,
        goal_id: &str,
        amount: f64,
    ) -> Result<FinancialGoal>;

    /// Deletes one of the user's goals.
    ///
    /// Returns the number of deleted documents.
    async fn delete(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}

/// Trait defining the contract for FinancialGoal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// Validates and creates a new goal.
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<GoalWithProgress>;

    /// Lists the user's goals with progress percentages.
    async fn get_goals(&self, user_id: &str) -> Result<Vec<GoalWithProgress>>;

    /// Retrieves a single goal owned by the user.
    async fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<GoalWithProgress>;

    /// Applies a partial update to a goal's name or target.
    async fn update_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        update: GoalUpdate,
    ) -> Result<GoalWithProgress>;

    /// Adds savings to a goal's current amount.
    async fn add_progress(
        &self,
        user_id: &str,
        goal_id: &str,
        amount: f64,
    ) -> Result<GoalWithProgress>;

    /// Withdraws savings from a goal's current amount.
    ///
    /// The current amount can never go below zero.
    async fn withdraw_progress(
        &self,
        user_id: &str,
        goal_id: &str,
        amount: f64,
    ) -> Result<GoalWithProgress>;

    /// Deletes a goal owned by the user.
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()>;
}
