use catalog_actor::mock::MockClient;
use catalog_actor::{FrameworkError, StoreError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use restaurant_chooser::clients::{PeopleClient, RestaurantClient};
use restaurant_chooser::model::{
    Delivery, Level, Person, PersonKey, Relationship, Restaurant, RestaurantKey,
};
use restaurant_chooser::restaurant_actor::RestaurantError;
use restaurant_chooser::selection::{
    FilterField, Notice, Phase, SelectionActor, SelectionError, SelectionEvent,
};

fn person(key: &str, first: &str) -> Person {
    Person {
        key: PersonKey::from(key),
        first_name: first.to_string(),
        last_name: "Doe".to_string(),
        relationship: Relationship::Friend,
    }
}

fn restaurant(key: &str, price: Level, rating: Level, delivery: Delivery) -> Restaurant {
    Restaurant {
        key: RestaurantKey::from(key),
        name: key.to_string(),
        cuisine: "Italian".parse().unwrap(),
        price,
        rating,
        phone: "5551234567".to_string(),
        address: "1 Main St".to_string(),
        website: "http://example.com".to_string(),
        delivery,
    }
}

fn catalog() -> (Vec<Person>, Vec<Restaurant>) {
    (
        vec![person("alice", "Alice"), person("bob", "Bob")],
        vec![
            restaurant("pizza", Level::Two, Level::Four, Delivery::Yes),
            restaurant("sushi", Level::Four, Level::Five, Delivery::No),
        ],
    )
}

/// Real Selection actor with mocked catalogs.
/// The mocks pin down exactly which catalog reads each transition makes.
#[tokio::test]
async fn test_selection_actor_with_mocked_catalogs() {
    let (people, restaurants) = catalog();
    let mut people_mock = MockClient::<Person>::new();
    let mut restaurant_mock = MockClient::<Restaurant>::new();

    // StartSelection reads both catalogs, ConfirmFilter re-reads restaurants
    people_mock.expect_list().return_ok(people);
    restaurant_mock.expect_list().return_ok(restaurants.clone());
    restaurant_mock.expect_list().return_ok(restaurants);

    let people_client = PeopleClient::new(people_mock.client());
    let restaurant_client = RestaurantClient::new(restaurant_mock.client());

    let (actor, client) = SelectionActor::new(8, StdRng::seed_from_u64(1));
    let actor_handle = tokio::spawn(actor.run((people_client, restaurant_client)));

    let view = client.dispatch(SelectionEvent::StartSelection).await.unwrap();
    assert_eq!(view.phase, Phase::PickingParticipants);
    assert_eq!(view.people.len(), 2);

    client
        .dispatch(SelectionEvent::ToggleParticipant(PersonKey::from("alice")))
        .await
        .unwrap();
    client
        .dispatch(SelectionEvent::ConfirmParticipants)
        .await
        .unwrap();
    client
        .dispatch(SelectionEvent::SetFilter {
            field: FilterField::Delivery,
            value: "Yes".to_string(),
        })
        .await
        .unwrap();

    let view = client.dispatch(SelectionEvent::ConfirmFilter).await.unwrap();
    assert_eq!(view.phase, Phase::Accepted);
    assert_eq!(view.notice, Some(Notice::AutoAccepted));
    assert_eq!(view.accepted.unwrap().name, "pizza");
    assert_eq!(view.participants.len(), 1);

    people_mock.verify();
    restaurant_mock.verify();

    drop(client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_catalog_failure_keeps_state() {
    let (people, _) = catalog();
    let mut people_mock = MockClient::<Person>::new();
    let mut restaurant_mock = MockClient::<Restaurant>::new();

    people_mock.expect_list().return_ok(people);
    restaurant_mock
        .expect_list()
        .return_err(FrameworkError::StorageRead(StoreError::Unavailable(
            "store offline".to_string(),
        )));

    let (actor, client) = SelectionActor::new(8, StdRng::seed_from_u64(1));
    tokio::spawn(actor.run((
        PeopleClient::new(people_mock.client()),
        RestaurantClient::new(restaurant_mock.client()),
    )));

    let err = client
        .dispatch(SelectionEvent::StartSelection)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SelectionError::Restaurants(RestaurantError::Storage(msg)) if msg.contains("store offline")
    ));
    assert_eq!(client.view().await.unwrap().phase, Phase::Idle);

    people_mock.verify();
    restaurant_mock.verify();
}

#[tokio::test]
async fn test_invalid_event_does_not_read_catalogs() {
    // No expectations: any catalog read would panic the mock
    let people_mock = MockClient::<Person>::new();
    let restaurant_mock = MockClient::<Restaurant>::new();

    let (actor, client) = SelectionActor::new(8, StdRng::seed_from_u64(1));
    tokio::spawn(actor.run((
        PeopleClient::new(people_mock.client()),
        RestaurantClient::new(restaurant_mock.client()),
    )));

    let err = client
        .dispatch(SelectionEvent::ConfirmFilter)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SelectionError::InvalidEvent {
            event: "ConfirmFilter",
            state: Phase::Idle
        }
    );

    let view = client.dispatch(SelectionEvent::Reset).await.unwrap();
    assert_eq!(view.phase, Phase::Idle);
}
