use crate::model::{Restaurant, RestaurantForm, RestaurantKey};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use catalog_actor::{ActorClient, CatalogClient, FrameworkError};
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: CatalogClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: CatalogClient<Restaurant>) -> Self {
        Self { inner }
    }

    /// Validate and store a new restaurant. Returns the generated key.
    #[instrument(skip(self))]
    pub async fn add_restaurant(
        &self,
        form: RestaurantForm,
    ) -> Result<RestaurantKey, RestaurantError> {
        debug!("Sending request");
        self.inner.add(form).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &CatalogClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RestaurantError::from(e)
    }
}
