//! In-memory `UserStore` for tests and local experiments
//!
//! Mirrors the semantics of the MongoDB store over a plain map: wholesale
//! overwrite on update, delete reporting whether a record was removed, no
//! ordering guarantee on `list`. Nothing is persisted.

use crate::error::Result;
use crate::model::{UserInput, UserRecord};
use crate::store::UserStore;
use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Map-backed store double.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<BTreeMap<ObjectId, UserRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, record: UserRecord) -> Result<ObjectId> {
        let id = record.id;
        self.users.write().await.insert(id, record);
        Ok(id)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<UserRecord>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn update(&self, id: ObjectId, fields: UserInput) -> Result<Option<UserRecord>> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(record) => {
                record.overwrite(fields, Utc::now());
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<bool> {
        Ok(self.users.write().await.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<UserRecord>> {
        Ok(self.users.read().await.values().cloned().collect())
    }
}
