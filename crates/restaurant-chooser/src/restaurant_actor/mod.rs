//! # Restaurant Actor
//!
//! The restaurant catalog: a [`CatalogActor`] over the `restaurants` collection.
//! Same shape as the [people actor](crate::people_actor), with keys `r_<uuid>`.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RestaurantClient;
use crate::model::{Restaurant, RestaurantKey};
use catalog_actor::{CatalogActor, KeyValueStore};
use std::sync::Arc;

/// Creates a new Restaurant actor and its client.
pub fn new(
    store: Arc<dyn KeyValueStore>,
    buffer_size: usize,
) -> (CatalogActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = CatalogActor::new(buffer_size, store, RestaurantKey::generate);
    (actor, RestaurantClient::new(generic_client))
}
