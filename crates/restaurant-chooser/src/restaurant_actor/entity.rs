//! [`CatalogEntity`] implementation for [`Restaurant`].

use crate::model::{Restaurant, RestaurantForm, RestaurantKey};
use crate::validation::ValidationError;
use catalog_actor::CatalogEntity;

impl CatalogEntity for Restaurant {
    type Key = RestaurantKey;
    type Create = RestaurantForm;
    type Error = ValidationError;

    const COLLECTION: &'static str = "restaurants";

    fn key(&self) -> &RestaurantKey {
        &self.key
    }

    fn from_create_params(key: RestaurantKey, params: RestaurantForm) -> Result<Self, Self::Error> {
        params.into_restaurant(key)
    }
}
