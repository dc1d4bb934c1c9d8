use crate::model::{Person, PersonForm, PersonKey};
use crate::people_actor::PeopleError;
use async_trait::async_trait;
use catalog_actor::{ActorClient, CatalogClient, FrameworkError};
use tracing::{debug, instrument};

/// Client for interacting with the People actor.
#[derive(Clone)]
pub struct PeopleClient {
    inner: CatalogClient<Person>,
}

impl PeopleClient {
    pub fn new(inner: CatalogClient<Person>) -> Self {
        Self { inner }
    }

    /// Validate and store a new person. Returns the generated key.
    #[instrument(skip(self))]
    pub async fn add_person(&self, form: PersonForm) -> Result<PersonKey, PeopleError> {
        debug!("Sending request");
        self.inner.add(form).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Person> for PeopleClient {
    type Error = PeopleError;

    fn inner(&self) -> &CatalogClient<Person> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PeopleError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Relationship;
    use crate::validation::{Field, ValidationError};
    use catalog_actor::mock::MockClient;

    #[tokio::test]
    async fn test_add_person_surfaces_validation_error() {
        let mut mock = MockClient::<Person>::new();
        let rejected = ValidationError::new(Field::FirstName, "First Name is required");
        mock.expect_add()
            .return_err(FrameworkError::EntityError(Box::new(rejected.clone())));

        let client = PeopleClient::new(mock.client());
        let err = client
            .add_person(PersonForm::new("", "Smith", "me"))
            .await
            .unwrap_err();

        assert_eq!(err, PeopleError::Validation(rejected));
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_and_remove_use_default_methods() {
        let mut mock = MockClient::<Person>::new();
        let alice = Person {
            key: PersonKey::from("p_1"),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            relationship: Relationship::Me,
        };
        mock.expect_list().return_ok(vec![alice.clone()]);
        mock.expect_remove(PersonKey::from("p_1")).return_ok(true);

        let client = PeopleClient::new(mock.client());
        assert_eq!(client.list().await.unwrap(), vec![alice]);
        assert!(client.remove(PersonKey::from("p_1")).await.unwrap());
        mock.verify();
    }
}
