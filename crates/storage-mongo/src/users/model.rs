//! Document models for users.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use dompetku_core::users::User;

/// Stored document for a user account.
///
/// Field names match the collection's existing documents; `password` holds
/// the argon2 hash and never leaves the storage/core layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub password: String,
    pub nama: String,
    pub foto: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

// Conversion to the domain model
impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            username: doc.username,
            password_hash: doc.password,
            nama: doc.nama,
            foto: doc.foto,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}
