//! # Catalog Actor
//!
//! Building blocks for keeping small persisted collections ("catalogs") behind an actor.
//!
//! Each catalog is one named collection in a [`KeyValueStore`], serialized as a JSON array.
//! A [`CatalogActor`] owns that collection: it runs in its own Tokio task and processes
//! `List`, `Get`, `Add` and `Remove` requests one at a time. Every request that changes the
//! collection is a full read-modify-write against the store, and because the actor is the
//! only writer and handles one message at a time, no two of those cycles ever interleave.
//!
//! ## Architecture Overview
//!
//! 1. **Storage Layer** ([`KeyValueStore`]) - named blobs ([`MemoryStore`], [`JsonFileStore`])
//! 2. **Entity Layer** ([`CatalogEntity`]) - the record type, its key and validated construction
//! 3. **Runtime Layer** ([`CatalogActor`]) - message processing and persistence
//! 4. **Interface Layer** ([`CatalogClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use catalog_actor::{CatalogActor, CatalogEntity, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Note { key: String, text: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("note is empty")]
//! struct EmptyNote;
//!
//! impl CatalogEntity for Note {
//!     type Key = String;
//!     type Create = String;
//!     type Error = EmptyNote;
//!     const COLLECTION: &'static str = "notes";
//!
//!     fn key(&self) -> &String { &self.key }
//!
//!     fn from_create_params(key: String, text: String) -> Result<Self, EmptyNote> {
//!         if text.is_empty() { return Err(EmptyNote); }
//!         Ok(Self { key, text })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(MemoryStore::new());
//!     let counter = std::sync::atomic::AtomicU32::new(0);
//!     let (actor, client) = CatalogActor::<Note>::new(8, store, move || {
//!         format!("n_{}", counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst))
//!     });
//!     tokio::spawn(actor.run());
//!
//!     let key = client.add("buy bread".to_string()).await.unwrap();
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!     assert!(client.remove(key).await.unwrap());
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that answers requests from a queue of
//! expectations instead of a real actor, so client-side logic can be tested without storage.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::CatalogActor;
pub use client::CatalogClient;
pub use client_trait::ActorClient;
pub use entity::CatalogEntity;
pub use error::FrameworkError;
pub use message::{CatalogRequest, Response};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
