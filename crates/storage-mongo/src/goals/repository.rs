use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use dompetku_core::errors::{DatabaseError, Result};
use dompetku_core::goals::{FinancialGoal, GoalChanges, GoalRepositoryTrait, NewGoal};

use super::model::GoalDocument;
use crate::db::{parse_object_id, with_timeout, OP_TIMEOUT};

/// Name of the goals collection.
pub const COLLECTION: &str = "financial_goals";

pub struct GoalRepository {
    collection: Collection<GoalDocument>,
}

impl GoalRepository {
    pub fn new(database: &Database) -> Self {
        GoalRepository {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn insert(&self, user_id: &str, new_goal: NewGoal) -> Result<FinancialGoal> {
        let owner = parse_object_id(user_id)?;
        let now = bson::DateTime::now();
        let document = GoalDocument {
            id: ObjectId::new(),
            user_id: owner,
            nama: new_goal.nama,
            target_amount: new_goal.target_amount,
            current_amount: 0.0,
            created_at: now,
            updated_at: now,
        };

        with_timeout("insert goal", OP_TIMEOUT, async {
            self.collection.insert_one(&document).await
        })
        .await?;
        Ok(document.into())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<FinancialGoal>> {
        let owner = parse_object_id(user_id)?;
        let documents: Vec<GoalDocument> = with_timeout("list goals", OP_TIMEOUT, async {
            self.collection
                .find(doc! { "user_id": owner })
                .sort(doc! { "created_at": -1 })
                .await?
                .try_collect()
                .await
        })
        .await?;

        Ok(documents.into_iter().map(FinancialGoal::from).collect())
    }

    async fn get_by_id(&self, user_id: &str, goal_id: &str) -> Result<Option<FinancialGoal>> {
        let owner = parse_object_id(user_id)?;
        let object_id = parse_object_id(goal_id)?;
        let found = with_timeout("find goal", OP_TIMEOUT, async {
            self.collection
                .find_one(doc! { "_id": object_id, "user_id": owner })
                .await
        })
        .await?;
        Ok(found.map(FinancialGoal::from))
    }

    async fn update(
        &self,
        user_id: &str,
        goal_id: &str,
        changes: GoalChanges,
    ) -> Result<FinancialGoal> {
        let owner = parse_object_id(user_id)?;
        let object_id = parse_object_id(goal_id)?;

        let mut set = doc! { "updated_at": bson::DateTime::now() };
        if let Some(nama) = changes.nama {
            set.insert("nama", nama);
        }
        if let Some(target_amount) = changes.target_amount {
            set.insert("target_amount", target_amount);
        }

        let updated = with_timeout("update goal", OP_TIMEOUT, async {
            self.collection
                .find_one_and_update(
                    doc! { "_id": object_id, "user_id": owner },
                    doc! { "$set": set },
                )
                .return_document(ReturnDocument::After)
                .await
        })
        .await?;

        updated
            .map(FinancialGoal::from)
            .ok_or_else(|| DatabaseError::NotFound("goal".to_string()).into())
    }

    async fn set_current_amount(
        &self,
        user_id: &str,
        goal_id: &str,
        amount: f64,
    ) -> Result<FinancialGoal> {
        let owner = parse_object_id(user_id)?;
        let object_id = parse_object_id(goal_id)?;

        let updated = with_timeout("set goal amount", OP_TIMEOUT, async {
            self.collection
                .find_one_and_update(
                    doc! { "_id": object_id, "user_id": owner },
                    doc! { "$set": {
                        "current_amount": amount,
                        "updated_at": bson::DateTime::now(),
                    }},
                )
                .return_document(ReturnDocument::After)
                .await
        })
        .await?;

        updated
            .map(FinancialGoal::from)
            .ok_or_else(|| DatabaseError::NotFound("goal".to_string()).into())
    }

    async fn delete(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        let owner = parse_object_id(user_id)?;
        let object_id = parse_object_id(goal_id)?;
        let result = with_timeout("delete goal", OP_TIMEOUT, async {
            self.collection
                .delete_one(doc! { "_id": object_id, "user_id": owner })
                .await
        })
        .await?;
        Ok(result.deleted_count as usize)
    }
}
