//! # Catalog Actor
//!
//! This module defines the `CatalogActor`, the server half of a catalog. It owns one named
//! collection in a [`KeyValueStore`] and processes requests sequentially, so every
//! read-modify-write cycle against that collection runs to completion before the next
//! request is taken.

use crate::client::CatalogClient;
use crate::entity::CatalogEntity;
use crate::error::FrameworkError;
use crate::message::CatalogRequest;
use crate::store::{KeyValueStore, StoreError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns one persisted collection of `T`.
///
/// # Concurrency Model
/// The store is read at the start of every request and written back in full on `Add` and
/// a successful `Remove`. Because the actor is the only writer of its collection and
/// handles one message at a time, those cycles never interleave, and no lock is needed
/// around the collection.
///
/// # Operations
///
/// * **List**: loads the collection and returns it in stored order.
/// * **Get**: loads the collection and returns a clone of the matching record, if any.
/// * **Add**:
///     1. Generates a key with the injected `next_key` function.
///     2. Calls `T::from_create_params`. A rejected form is answered with
///        [`FrameworkError::EntityError`] before the store is touched.
///     3. Loads the collection, appends the record, writes it back.
///     4. Returns the new key.
/// * **Remove**: loads the collection, drops the matching record and writes back. When no
///   record matches, nothing is written and the answer is `false`.
///
/// A collection that cannot be read or decoded yields [`FrameworkError::StorageRead`]; a
/// failed write yields [`FrameworkError::StorageWrite`]. Either way the stored copy is left
/// as it was.
pub struct CatalogActor<T: CatalogEntity> {
    receiver: mpsc::Receiver<CatalogRequest<T>>,
    store: Arc<dyn KeyValueStore>,
    next_key: Box<dyn Fn() -> T::Key + Send + Sync>,
}

impl<T: CatalogEntity> CatalogActor<T> {
    /// Creates a new `CatalogActor` and its associated `CatalogClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `store` - The key-value store holding the collection.
    /// * `next_key` - Generates the key for each added record.
    pub fn new<F>(
        buffer_size: usize,
        store: Arc<dyn KeyValueStore>,
        next_key: F,
    ) -> (Self, CatalogClient<T>)
    where
        F: Fn() -> T::Key + Send + Sync + 'static,
    {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            next_key: Box::new(next_key),
        };
        let client = CatalogClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        let collection = T::COLLECTION;
        info!(collection, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::List { respond_to } => {
                    let result = self.load().await;
                    match &result {
                        Ok(items) => debug!(collection, size = items.len(), "List"),
                        Err(e) => warn!(collection, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Get { key, respond_to } => {
                    let result = self
                        .load()
                        .await
                        .map(|items| items.into_iter().find(|item| item.key() == &key));
                    match &result {
                        Ok(item) => debug!(collection, %key, found = item.is_some(), "Get"),
                        Err(e) => warn!(collection, %key, error = %e, "Get failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Add { params, respond_to } => {
                    debug!(collection, ?params, "Add");
                    let result = self.add(params).await;
                    if let Err(e) = &result {
                        warn!(collection, error = %e, "Add failed");
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Remove { key, respond_to } => {
                    debug!(collection, %key, "Remove");
                    let result = self.remove(&key).await;
                    match &result {
                        Ok(true) => info!(collection, %key, "Removed"),
                        Ok(false) => debug!(collection, %key, "Nothing to remove"),
                        Err(e) => warn!(collection, %key, error = %e, "Remove failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(collection, "Shutdown");
    }

    async fn add(&self, params: T::Create) -> Result<T::Key, FrameworkError> {
        let key = (self.next_key)();
        let item = T::from_create_params(key.clone(), params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        let mut items = self.load().await?;
        items.push(item);
        self.save(&items).await?;
        info!(collection = T::COLLECTION, %key, size = items.len(), "Added");
        Ok(key)
    }

    async fn remove(&self, key: &T::Key) -> Result<bool, FrameworkError> {
        let mut items = self.load().await?;
        let before = items.len();
        items.retain(|item| item.key() != key);
        if items.len() == before {
            return Ok(false);
        }
        self.save(&items).await?;
        Ok(true)
    }

    async fn load(&self) -> Result<Vec<T>, FrameworkError> {
        let raw = self
            .store
            .get(T::COLLECTION)
            .await
            .map_err(FrameworkError::StorageRead)?;
        match raw {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| {
                FrameworkError::StorageRead(StoreError::Decode {
                    name: T::COLLECTION.to_string(),
                    source,
                })
            }),
        }
    }

    async fn save(&self, items: &[T]) -> Result<(), FrameworkError> {
        let raw = serde_json::to_string(items).map_err(|source| {
            FrameworkError::StorageWrite(StoreError::Encode {
                name: T::COLLECTION.to_string(),
                source,
            })
        })?;
        self.store
            .set(T::COLLECTION, raw)
            .await
            .map_err(FrameworkError::StorageWrite)
    }
}
