use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use dompetku_core::errors::{DatabaseError, Result};
use dompetku_core::transactions::{
    Transaction, TransactionData, TransactionRepositoryTrait, TransactionType,
};

use super::model::{tanggal_to_bson, TransactionDocument};
use crate::db::{parse_object_id, with_timeout, OP_TIMEOUT};

/// Name of the transactions collection.
pub const COLLECTION: &str = "transactions";

pub struct TransactionRepository {
    collection: Collection<TransactionDocument>,
}

impl TransactionRepository {
    pub fn new(database: &Database) -> Self {
        TransactionRepository {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn insert(&self, user_id: &str, data: TransactionData) -> Result<Transaction> {
        let owner = parse_object_id(user_id)?;
        let now = bson::DateTime::now();
        let document = TransactionDocument {
            id: ObjectId::new(),
            user_id: owner,
            tipe: data.tipe,
            nominal: data.nominal,
            kategori: data.kategori,
            catatan: data.catatan,
            tanggal: tanggal_to_bson(data.tanggal),
            created_at: now,
            updated_at: now,
        };

        with_timeout("insert transaction", OP_TIMEOUT, async {
            self.collection.insert_one(&document).await
        })
        .await?;
        Ok(document.into())
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        tipe: Option<TransactionType>,
    ) -> Result<Vec<Transaction>> {
        let owner = parse_object_id(user_id)?;
        let mut filter = doc! { "user_id": owner };
        if let Some(tipe) = tipe {
            filter.insert("tipe", tipe.as_str());
        }

        let documents: Vec<TransactionDocument> =
            with_timeout("list transactions", OP_TIMEOUT, async {
                self.collection
                    .find(filter)
                    .sort(doc! { "tanggal": -1 })
                    .await?
                    .try_collect()
                    .await
            })
            .await?;

        Ok(documents.into_iter().map(Transaction::from).collect())
    }

    async fn get_by_id(&self, user_id: &str, transaction_id: &str) -> Result<Option<Transaction>> {
        let owner = parse_object_id(user_id)?;
        let object_id = parse_object_id(transaction_id)?;
        let found = with_timeout("find transaction", OP_TIMEOUT, async {
            self.collection
                .find_one(doc! { "_id": object_id, "user_id": owner })
                .await
        })
        .await?;
        Ok(found.map(Transaction::from))
    }

    async fn update(
        &self,
        user_id: &str,
        transaction_id: &str,
        data: TransactionData,
    ) -> Result<Transaction> {
        let owner = parse_object_id(user_id)?;
        let object_id = parse_object_id(transaction_id)?;

        let updated = with_timeout("update transaction", OP_TIMEOUT, async {
            self.collection
                .find_one_and_update(
                    doc! { "_id": object_id, "user_id": owner },
                    doc! { "$set": {
                        "tipe": data.tipe.as_str(),
                        "nominal": data.nominal,
                        "kategori": data.kategori,
                        "catatan": data.catatan,
                        "tanggal": tanggal_to_bson(data.tanggal),
                        "updated_at": bson::DateTime::now(),
                    }},
                )
                .return_document(ReturnDocument::After)
                .await
        })
        .await?;

        updated
            .map(Transaction::from)
            .ok_or_else(|| DatabaseError::NotFound("transaction".to_string()).into())
    }

    async fn delete(&self, user_id: &str, transaction_id: &str) -> Result<usize> {
        let owner = parse_object_id(user_id)?;
        let object_id = parse_object_id(transaction_id)?;
        let result = with_timeout("delete transaction", OP_TIMEOUT, async {
            self.collection
                .delete_one(doc! { "_id": object_id, "user_id": owner })
                .await
        })
        .await?;
        Ok(result.deleted_count as usize)
    }
}
