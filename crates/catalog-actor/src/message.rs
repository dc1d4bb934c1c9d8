//! # Catalog Messages
//!
//! The requests a [`CatalogClient`](crate::CatalogClient) sends to a
//! [`CatalogActor`](crate::CatalogActor), each carrying its own reply channel.

use crate::entity::CatalogEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message type sent to a catalog actor.
///
/// - **List**: every record, in stored order.
/// - **Get**: one record by key.
/// - **Add**: validate a [`CatalogEntity::Create`] form, assign a key, append and persist.
/// - **Remove**: drop a record by key; answers `false` when nothing matched.
#[derive(Debug)]
pub enum CatalogRequest<T: CatalogEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    Add {
        params: T::Create,
        respond_to: Response<T::Key>,
    },
    Remove {
        key: T::Key,
        respond_to: Response<bool>,
    },
}
