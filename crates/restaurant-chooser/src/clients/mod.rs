//! Type-safe wrappers around [`CatalogClient`](catalog_actor::CatalogClient).

pub mod people_client;
pub mod restaurant_client;

pub use catalog_actor::ActorClient;
pub use people_client::*;
pub use restaurant_client::*;
