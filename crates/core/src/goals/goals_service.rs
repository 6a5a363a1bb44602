use log::debug;
use std::sync::Arc;

use super::goals_model::{FinancialGoal, GoalUpdate, GoalWithProgress, NewGoal};
use super::goals_traits::{GoalChanges, GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for managing savings goals.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    /// Creates a new GoalService instance
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        Self { repository }
    }

    async fn get_owned(&self, user_id: &str, goal_id: &str) -> Result<FinancialGoal> {
        self.repository
            .get_by_id(user_id, goal_id)
            .await?
            .ok_or_else(|| Error::NotFound("Goal".to_string()))
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<GoalWithProgress> {
        if new_goal.nama.is_empty() {
            return Err(ValidationError::MissingField("nama".to_string()).into());
        }
        if new_goal.target_amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        debug!("Creating goal '{}' for user {}", new_goal.nama, user_id);
        let goal = self.repository.insert(user_id, new_goal).await?;
        Ok(goal.into())
    }

    async fn get_goals(&self, user_id: &str) -> Result<Vec<GoalWithProgress>> {
        let goals = self.repository.list_for_user(user_id).await?;
        Ok(goals.into_iter().map(GoalWithProgress::from).collect())
    }

    async fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<GoalWithProgress> {
        Ok(self.get_owned(user_id, goal_id).await?.into())
    }

    async fn update_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        update: GoalUpdate,
    ) -> Result<GoalWithProgress> {
        if let Some(target) = update.target_amount {
            if target <= 0.0 {
                return Err(ValidationError::NonPositiveAmount.into());
            }
        }
        // Ownership check before the write, mirroring the read path.
        self.get_owned(user_id, goal_id).await?;

        let goal = self
            .repository
            .update(
                user_id,
                goal_id,
                GoalChanges {
                    nama: update.nama.filter(|n| !n.is_empty()),
                    target_amount: update.target_amount,
                },
            )
            .await?;
        Ok(goal.into())
    }

    async fn add_progress(
        &self,
        user_id: &str,
        goal_id: &str,
        amount: f64,
    ) -> Result<GoalWithProgress> {
        if amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        let goal = self.get_owned(user_id, goal_id).await?;
        let updated = self
            .repository
            .set_current_amount(user_id, goal_id, goal.current_amount + amount)
            .await?;
        Ok(updated.into())
    }

    async fn withdraw_progress(
        &self,
        user_id: &str,
        goal_id: &str,
        amount: f64,
    ) -> Result<GoalWithProgress> {
        if amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        let goal = self.get_owned(user_id, goal_id).await?;
        if amount > goal.current_amount {
            return Err(ValidationError::InvalidInput(
                "Jumlah penarikan melebihi tabungan".to_string(),
            )
            .into());
        }
        let updated = self
            .repository
            .set_current_amount(user_id, goal_id, goal.current_amount - amount)
            .await?;
        Ok(updated.into())
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()> {
        let deleted = self.repository.delete(user_id, goal_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound("Goal".to_string()));
        }
        Ok(())
    }
}
