use async_trait::async_trait;
use bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use dompetku_core::errors::{DatabaseError, Result};
use dompetku_core::users::{NewUserRecord, User, UserRepositoryTrait};

use super::model::UserDocument;
use crate::db::{parse_object_id, with_timeout, OP_TIMEOUT, PROFILE_OP_TIMEOUT};

/// Name of the users collection.
pub const COLLECTION: &str = "users";

pub struct UserRepository {
    collection: Collection<UserDocument>,
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        UserRepository {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let found = with_timeout("find user by username", OP_TIMEOUT, async {
            self.collection
                .find_one(doc! { "username": username })
                .await
        })
        .await?;
        Ok(found.map(User::from))
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let object_id = parse_object_id(user_id)?;
        let found = with_timeout("find user by id", OP_TIMEOUT, async {
            self.collection.find_one(doc! { "_id": object_id }).await
        })
        .await?;
        Ok(found.map(User::from))
    }

    async fn insert(&self, record: NewUserRecord) -> Result<User> {
        let now = bson::DateTime::now();
        let document = UserDocument {
            id: ObjectId::new(),
            username: record.username,
            password: record.password_hash,
            nama: record.nama,
            foto: String::new(),
            created_at: now,
            updated_at: now,
        };

        with_timeout("insert user", OP_TIMEOUT, async {
            self.collection.insert_one(&document).await
        })
        .await?;
        Ok(document.into())
    }

    async fn update_profile(
        &self,
        user_id: &str,
        nama: Option<String>,
        foto: Option<String>,
    ) -> Result<User> {
        let object_id = parse_object_id(user_id)?;

        let mut set = doc! { "updated_at": bson::DateTime::now() };
        if let Some(nama) = nama {
            set.insert("nama", nama);
        }
        if let Some(foto) = foto {
            set.insert("foto", foto);
        }

        let updated = with_timeout("update profile", PROFILE_OP_TIMEOUT, async {
            self.collection
                .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set })
                .return_document(ReturnDocument::After)
                .await
        })
        .await?;

        updated
            .map(User::from)
            .ok_or_else(|| DatabaseError::NotFound("user".to_string()).into())
    }

    async fn update_password(&self, user_id: &str, password_hash: &str) -> Result<()> {
        let object_id = parse_object_id(user_id)?;
        let result = with_timeout("update password", OP_TIMEOUT, async {
            self.collection
                .update_one(
                    doc! { "_id": object_id },
                    doc! { "$set": {
                        "password": password_hash,
                        "updated_at": bson::DateTime::now(),
                    }},
                )
                .await
        })
        .await?;

        if result.matched_count == 0 {
            return Err(DatabaseError::NotFound("user".to_string()).into());
        }
        Ok(())
    }
}
