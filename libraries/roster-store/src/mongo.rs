//! MongoDB-backed `UserStore`

use crate::error::{Result, StoreError};
use crate::model::{UserInput, UserRecord};
use crate::store::UserStore;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures_util::StreamExt;
use mongodb::error::ErrorKind;
use mongodb::{Client, Collection};
use std::future::IntoFuture;
use std::time::Duration;
use tokio::time::timeout;

const COLLECTION: &str = "users";

/// Time budget for a single store call. On expiry the call is dropped and
/// reported as `StoreError::Timeout`; it is never retried.
const OP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect to the deployment and return a store over its `users` collection.
///
/// Pings the server before returning so a bad connection string fails at
/// startup instead of on the first request.
pub async fn connect(uri: &str, database: &str) -> Result<MongoStore> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;
    let db = client.database(database);

    bounded("ping", db.run_command(doc! { "ping": 1 }))
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    Ok(MongoStore {
        users: db.collection(COLLECTION),
    })
}

/// `UserStore` over a MongoDB `users` collection.
///
/// The driver's connection pool is the only state; clones share it.
#[derive(Clone)]
pub struct MongoStore {
    users: Collection<UserRecord>,
}

#[async_trait]
impl UserStore for MongoStore {
    async fn insert(&self, record: UserRecord) -> Result<ObjectId> {
        let id = record.id;
        let ack = bounded("insert_one", self.users.insert_one(&record)).await?;
        Ok(ack.inserted_id.as_object_id().unwrap_or(id))
    }

    async fn find(&self, id: ObjectId) -> Result<Option<UserRecord>> {
        bounded("find_one", self.users.find_one(doc! { "_id": id })).await
    }

    async fn update(&self, id: ObjectId, fields: UserInput) -> Result<Option<UserRecord>> {
        // Wholesale overwrite of all mutable fields, never a sparse merge.
        let update = doc! { "$set": {
            "name": fields.name,
            "dob": fields.dob,
            "address": fields.address,
            "description": fields.description,
            "updatedAt": bson::DateTime::now(),
        }};

        let result = bounded("update_one", self.users.update_one(doc! { "_id": id }, update)).await?;
        if result.matched_count == 0 {
            return Ok(None);
        }

        // Read back the record the update touched.
        self.find(id).await
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = bounded("delete_one", self.users.delete_one(doc! { "_id": id })).await?;
        Ok(result.deleted_count == 1)
    }

    async fn list(&self) -> Result<Vec<UserRecord>> {
        match timeout(OP_TIMEOUT, self.collect_all()).await {
            Ok(users) => users,
            Err(_) => Err(StoreError::Timeout {
                op: "find",
                timeout_secs: OP_TIMEOUT.as_secs(),
            }),
        }
    }
}

impl MongoStore {
    async fn collect_all(&self) -> Result<Vec<UserRecord>> {
        let mut cursor = self.users.find(doc! {}).await?;
        let mut users = Vec::new();

        while let Some(next) = cursor.next().await {
            match next {
                Ok(record) => users.push(record),
                // A record that no longer decodes is skipped, not fatal to
                // the whole listing.
                Err(err) if matches!(*err.kind, ErrorKind::BsonDeserialization(_)) => {
                    tracing::warn!("skipping undecodable user document: {err}");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(users)
    }
}

/// Run one driver call under the per-operation time budget.
async fn bounded<T, F>(op: &'static str, call: F) -> Result<T>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match timeout(OP_TIMEOUT, call).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(StoreError::Timeout {
            op,
            timeout_secs: OP_TIMEOUT.as_secs(),
        }),
    }
}
