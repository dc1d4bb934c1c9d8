//! # CatalogEntity Trait
//!
//! The contract every record type (Person, Restaurant, ...) implements to be kept in a
//! catalog by the generic [`CatalogActor`](crate::CatalogActor).
//!
//! A catalog is persisted as one JSON array under [`CatalogEntity::COLLECTION`], so the
//! record must round-trip through `serde`. Construction goes through
//! [`CatalogEntity::from_create_params`], which is where a record validates its raw form;
//! the actor only assigns the key and persists.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by a `CatalogActor`.
///
/// The associated types keep each catalog's requests type-safe: a `PersonForm` can only
/// be sent to the people catalog.
pub trait CatalogEntity:
    Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The unique key of a record. Generated by the actor on `Add`.
    type Key: Eq + Clone + Send + Sync + Display + Debug;

    /// The raw form submitted to create a record.
    type Create: Send + Sync + Debug;

    /// The error returned when a form is rejected.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name of the collection in the key-value store.
    const COLLECTION: &'static str;

    /// The record's key.
    fn key(&self) -> &Self::Key;

    /// Validate the form and build the record under the freshly generated key.
    fn from_create_params(key: Self::Key, params: Self::Create) -> Result<Self, Self::Error>;
}
