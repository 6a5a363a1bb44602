//! MongoDB connection management and operation deadlines.

use std::future::Future;
use std::time::Duration;

use bson::oid::ObjectId;
use log::info;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};

use crate::errors::StorageError;
use dompetku_core::errors::{DatabaseError, Error, Result, ValidationError};

/// Deadline for regular database operations.
pub const OP_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline for profile writes, which the original API allows more time.
pub const PROFILE_OP_TIMEOUT: Duration = Duration::from_secs(30);

/// Connects to MongoDB, pings the server, and ensures indexes.
///
/// Fails fast instead of lazily connecting on first use; the returned
/// handle is cloned into the repositories at startup.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database> {
    let database = with_timeout("connect", OP_TIMEOUT, async {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(db_name);
        database.run_command(doc! { "ping": 1 }).await?;
        Ok(database)
    })
    .await
    .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))?;

    ensure_indexes(&database).await?;
    info!("Connected to MongoDB database '{}'", db_name);
    Ok(database)
}

/// Creates the unique username index. Idempotent.
async fn ensure_indexes(database: &Database) -> Result<()> {
    let index = IndexModel::builder()
        .keys(doc! { "username": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    with_timeout("ensure indexes", OP_TIMEOUT, async {
        database
            .collection::<bson::Document>(crate::users::COLLECTION)
            .create_index(index)
            .await?;
        Ok(())
    })
    .await
}

/// Runs a driver future under a bounded deadline.
///
/// On expiry the operation fails with a timeout error rather than blocking
/// the request indefinitely. No retries.
pub(crate) async fn with_timeout<T, F>(op: &str, deadline: Duration, fut: F) -> Result<T>
where
    F: Future<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result.map_err(|e| StorageError::QueryFailed(e).into()),
        Err(_) => Err(StorageError::Timeout(op.to_string()).into()),
    }
}

/// Parses an opaque id from the API into an `ObjectId`.
///
/// A malformed id is a client error, not a driver error.
pub fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| ValidationError::InvalidInput(format!("ID '{}' tidak valid", id)).into())
}
