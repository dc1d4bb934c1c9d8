//! # People Actor
//!
//! The people catalog: a [`CatalogActor`] over the `people` collection.
//!
//! ## Structure
//!
//! - [`entity`] - [`CatalogEntity`](catalog_actor::CatalogEntity) implementation for [`Person`]
//! - [`error`] - [`PeopleError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use catalog_actor::MemoryStore;
//! use restaurant_chooser::model::PersonForm;
//! use restaurant_chooser::people_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = people_actor::new(Arc::new(MemoryStore::new()), 32);
//!     tokio::spawn(actor.run());
//!
//!     let key = client.add_person(PersonForm::new("Alice", "Smith", "me")).await?;
//!     assert!(key.as_str().starts_with("p_"));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PeopleClient;
use crate::model::{Person, PersonKey};
use catalog_actor::{CatalogActor, KeyValueStore};
use std::sync::Arc;

/// Creates a new People actor and its client. Keys are `p_<uuid>`.
pub fn new(
    store: Arc<dyn KeyValueStore>,
    buffer_size: usize,
) -> (CatalogActor<Person>, PeopleClient) {
    let (actor, generic_client) = CatalogActor::new(buffer_size, store, PersonKey::generate);
    (actor, PeopleClient::new(generic_client))
}
