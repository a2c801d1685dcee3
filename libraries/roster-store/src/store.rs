//! Storage seam for the user directory

use crate::error::Result;
use crate::model::{UserInput, UserRecord};
use async_trait::async_trait;
use bson::oid::ObjectId;

/// Store operations over the user collection.
///
/// This trait abstracts the document store so the service can run against
/// MongoDB in production and an in-memory double in tests. Implementations
/// hold the only shared state in the system; every call is one independent
/// round trip with no caching in between.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a freshly built record and return the acknowledged id.
    async fn insert(&self, record: UserRecord) -> Result<ObjectId>;

    /// Fetch one record by id.
    async fn find(&self, id: ObjectId) -> Result<Option<UserRecord>>;

    /// Overwrite the mutable fields of the record with `fields` and refresh
    /// `updatedAt`, then return the updated record. Returns `None` when no
    /// record matched, in which case nothing was written or read back.
    async fn update(&self, id: ObjectId, fields: UserInput) -> Result<Option<UserRecord>>;

    /// Remove one record by id. Returns whether exactly one was removed.
    async fn delete(&self, id: ObjectId) -> Result<bool>;

    /// Fetch every record in store-native order.
    async fn list(&self) -> Result<Vec<UserRecord>>;
}
