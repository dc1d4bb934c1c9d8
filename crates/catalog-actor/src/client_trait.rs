//! # ActorClient Trait
//!
//! Common interface for catalog-specific clients: default `list`, `get` and `remove` built on
//! top of a generic [`CatalogClient`], with framework errors mapped into the catalog's own
//! error type.
use crate::{CatalogClient, CatalogEntity, FrameworkError};
use async_trait::async_trait;

/// Trait for catalog-specific clients to inherit the standard read and remove operations.
///
/// # Example
///
/// ```rust
/// use catalog_actor::{ActorClient, CatalogClient, CatalogEntity, FrameworkError};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Tag { key: String }
///
/// #[derive(Debug, thiserror::Error)]
/// enum TagError {
///     #[error("tag catalog unavailable: {0}")]
///     Unavailable(String),
/// }
///
/// impl CatalogEntity for Tag {
///     type Key = String;
///     type Create = ();
///     type Error = TagError;
///     const COLLECTION: &'static str = "tags";
///     fn key(&self) -> &String { &self.key }
///     fn from_create_params(key: String, _: ()) -> Result<Self, TagError> { Ok(Self { key }) }
/// }
///
/// struct TagClient {
///     inner: CatalogClient<Tag>,
/// }
///
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &CatalogClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TagError::Unavailable(e.to_string())
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     // list(), get() and remove() are provided automatically
///     let _ = client.list().await;
///     let _ = client.remove("t_1".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: CatalogEntity>: Send + Sync {
    /// The catalog-specific error type.
    type Error: std::error::Error + Send + Sync;

    /// Access the inner generic CatalogClient.
    fn inner(&self) -> &CatalogClient<T>;

    /// Map framework errors to the catalog's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch every record in stored order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch a record by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: T::Key) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(key).await.map_err(Self::map_error)
    }

    /// Remove a record by key. `Ok(false)` when no record had that key.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, key: T::Key) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remove(key).await.map_err(Self::map_error)
    }
}
