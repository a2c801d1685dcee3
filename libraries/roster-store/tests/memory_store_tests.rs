/// Memory store tests
/// Exercise the `UserStore` contract against the in-memory implementation.
use bson::oid::ObjectId;
use roster_store::memory::MemoryStore;
use roster_store::{UserInput, UserRecord, UserStore};

fn input(name: &str) -> UserInput {
    UserInput {
        name: name.to_string(),
        dob: "1815-12-10".to_string(),
        address: "London".to_string(),
        description: "mathematician".to_string(),
    }
}

#[tokio::test]
async fn insert_then_find_roundtrips() {
    let store = MemoryStore::new();

    let id = store.insert(UserRecord::new(input("Ada"))).await.unwrap();
    let found = store.find(id).await.unwrap().unwrap();

    assert_eq!(found.id, id);
    assert_eq!(found.name, "Ada");
    assert_eq!(found.dob, "1815-12-10");
}

#[tokio::test]
async fn find_unknown_id_returns_none() {
    let store = MemoryStore::new();
    assert!(store.find(ObjectId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn update_overwrites_wholesale_and_bumps_updated_at() {
    let store = MemoryStore::new();
    let id = store.insert(UserRecord::new(input("Ada"))).await.unwrap();
    let before = store.find(id).await.unwrap().unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let fields = UserInput {
        name: "Ada Lovelace".to_string(),
        ..UserInput::default()
    };
    let updated = store.update(id, fields).await.unwrap().unwrap();

    assert_eq!(updated.name, "Ada Lovelace");
    // Unsupplied fields are cleared, not merged
    assert_eq!(updated.address, "");
    assert_eq!(updated.created_at, before.created_at);
    assert!(updated.updated_at > before.updated_at);
}

#[tokio::test]
async fn update_unknown_id_returns_none_and_writes_nothing() {
    let store = MemoryStore::new();
    let id = store.insert(UserRecord::new(input("Ada"))).await.unwrap();

    let missing = store.update(ObjectId::new(), input("Ghost")).await.unwrap();
    assert!(missing.is_none());

    // The existing record is untouched
    let found = store.find(id).await.unwrap().unwrap();
    assert_eq!(found.name, "Ada");
}

#[tokio::test]
async fn delete_reports_whether_a_record_was_removed() {
    let store = MemoryStore::new();
    let id = store.insert(UserRecord::new(input("Ada"))).await.unwrap();

    assert!(store.delete(id).await.unwrap());
    assert!(store.find(id).await.unwrap().is_none());
    assert!(!store.delete(id).await.unwrap());
}

#[tokio::test]
async fn list_returns_every_record() {
    let store = MemoryStore::new();
    assert!(store.list().await.unwrap().is_empty());

    for name in ["Ada", "Grace", "Hedy"] {
        store.insert(UserRecord::new(input(name))).await.unwrap();
    }

    let users = store.list().await.unwrap();
    assert_eq!(users.len(), 3);
}
