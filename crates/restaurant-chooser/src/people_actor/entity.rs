//! [`CatalogEntity`] implementation for [`Person`].
//!
//! Adding a person validates the [`PersonForm`] field by field; the first failing field is
//! returned and nothing is stored.

use crate::model::{Person, PersonForm, PersonKey};
use crate::validation::ValidationError;
use catalog_actor::CatalogEntity;

impl CatalogEntity for Person {
    type Key = PersonKey;
    type Create = PersonForm;
    type Error = ValidationError;

    const COLLECTION: &'static str = "people";

    fn key(&self) -> &PersonKey {
        &self.key
    }

    fn from_create_params(key: PersonKey, params: PersonForm) -> Result<Self, Self::Error> {
        params.into_person(key)
    }
}
