use async_trait::async_trait;
use catalog_actor::{
    CatalogActor, CatalogClient, CatalogEntity, FrameworkError, JsonFileStore, KeyValueStore,
    MemoryStore, StoreError,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Dish {
    key: String,
    name: String,
}

#[derive(Debug)]
struct DishCreate {
    name: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Dish name is required")]
struct DishError;

impl CatalogEntity for Dish {
    type Key = String;
    type Create = DishCreate;
    type Error = DishError;
    const COLLECTION: &'static str = "dishes";

    fn key(&self) -> &String {
        &self.key
    }

    fn from_create_params(key: String, params: DishCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(DishError);
        }
        Ok(Self {
            key,
            name: params.name,
        })
    }
}

fn spawn_catalog(store: Arc<dyn KeyValueStore>) -> CatalogClient<Dish> {
    let counter = AtomicU32::new(1);
    let (actor, client) = CatalogActor::<Dish>::new(10, store, move || {
        format!("d_{}", counter.fetch_add(1, Ordering::SeqCst))
    });
    tokio::spawn(actor.run());
    client
}

fn dish(name: &str) -> DishCreate {
    DishCreate {
        name: name.to_string(),
    }
}

/// A store whose writes can be switched off.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, name: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(name).await
    }

    async fn set(&self, name: &str, value: String) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("disk full".to_string()));
        }
        self.inner.set(name, value).await
    }
}

// --- Tests ---

#[tokio::test]
async fn test_catalog_full_lifecycle() {
    let client = spawn_catalog(Arc::new(MemoryStore::new()));

    // Empty store reads as an empty collection
    assert!(client.list().await.unwrap().is_empty());

    // 1. Add
    let first = client.add(dish("Pad Thai")).await.unwrap();
    let second = client.add(dish("Ramen")).await.unwrap();
    assert_eq!(first, "d_1");
    assert_eq!(second, "d_2");

    // 2. List keeps insertion order
    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["Pad Thai", "Ramen"]);

    // 3. Get
    let fetched = client.get(second.clone()).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Ramen");
    assert!(client.get("d_99".to_string()).await.unwrap().is_none());

    // 4. Remove
    assert!(client.remove(first.clone()).await.unwrap());
    assert!(!client.remove(first).await.unwrap());
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_rejected_form_is_not_persisted() {
    let store = Arc::new(MemoryStore::new());
    let client = spawn_catalog(store.clone());

    let result = client.add(dish("   ")).await;
    match result {
        Err(FrameworkError::EntityError(e)) => {
            assert!(e.downcast_ref::<DishError>().is_some());
        }
        other => panic!("expected entity error, got {other:?}"),
    }
    assert!(store.get("dishes").await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_adds_are_all_kept() {
    let client = spawn_catalog(Arc::new(MemoryStore::new()));

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client.add(dish(&format!("Dish {i}"))).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(client.list().await.unwrap().len(), 20);
}

#[tokio::test]
async fn test_corrupt_collection_is_a_read_error() {
    let store = Arc::new(MemoryStore::new());
    store
        .set("dishes", "{not json".to_string())
        .await
        .unwrap();
    let client = spawn_catalog(store.clone());

    let err = client.list().await.unwrap_err();
    assert!(matches!(
        err,
        FrameworkError::StorageRead(StoreError::Decode { .. })
    ));

    // Add must not overwrite what it could not read
    let err = client.add(dish("Ramen")).await.unwrap_err();
    assert!(err.is_storage());
    assert_eq!(
        store.get("dishes").await.unwrap().as_deref(),
        Some("{not json")
    );
}

#[tokio::test]
async fn test_failed_write_leaves_collection_unchanged() {
    let store = Arc::new(FlakyStore::default());
    let client = spawn_catalog(store.clone());

    let key = client.add(dish("Pad Thai")).await.unwrap();

    store.fail_writes.store(true, Ordering::SeqCst);
    let err = client.add(dish("Ramen")).await.unwrap_err();
    assert!(matches!(err, FrameworkError::StorageWrite(_)));
    let err = client.remove(key.clone()).await.unwrap_err();
    assert!(matches!(err, FrameworkError::StorageWrite(_)));

    let items = client.list().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].key, key);
}

#[tokio::test]
async fn test_file_store_survives_actor_restart() {
    let dir = tempfile::tempdir().unwrap();

    let client = spawn_catalog(Arc::new(JsonFileStore::new(dir.path())));
    client.add(dish("Pad Thai")).await.unwrap();
    drop(client);

    let client = spawn_catalog(Arc::new(JsonFileStore::new(dir.path())));
    let items = client.list().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Pad Thai");
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let (actor, client) = CatalogActor::<Dish>::new(1, store, || "d_1".to_string());
    drop(actor);

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
