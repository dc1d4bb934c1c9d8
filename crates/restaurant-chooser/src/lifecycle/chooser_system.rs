use crate::clients::{ActorClient, PeopleClient, RestaurantClient};
use crate::config::Config;
use crate::error::ChooserError;
use crate::model::{Person, PersonForm, PersonKey, Restaurant, RestaurantForm, RestaurantKey};
use crate::people_actor::PeopleError;
use crate::restaurant_actor::RestaurantError;
use crate::selection::{
    FilterField, SelectionActor, SelectionClient, SelectionEvent, SelectionView,
};
use catalog_actor::{JsonFileStore, KeyValueStore};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// An input from the presentation layer.
#[derive(Debug, Clone)]
pub enum Event {
    AddPerson(PersonForm),
    DeletePerson(PersonKey),
    AddRestaurant(RestaurantForm),
    DeleteRestaurant(RestaurantKey),
    StartSelection,
    ToggleParticipant(PersonKey),
    ConfirmParticipants,
    SetFilter(FilterField, String),
    ConfirmFilter,
    RandomChoose,
    Accept,
    Veto(PersonKey),
    Reset,
}

/// The result of a catalog event, when it has one.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    PersonAdded(PersonKey),
    RestaurantAdded(RestaurantKey),
    /// `false` when the key was not in the catalog.
    Removed(bool),
}

/// A catalog that could not be listed while building a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogReadError {
    #[error(transparent)]
    People(#[from] PeopleError),
    #[error(transparent)]
    Restaurants(#[from] RestaurantError),
}

/// Everything the presentation layer renders after an event.
///
/// A catalog that could not be listed shows up empty, with the reason in `read_errors`.
/// That never means the event failed: by the time the snapshot is built the event has
/// already been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub people: Vec<Person>,
    pub restaurants: Vec<Restaurant>,
    pub selection: SelectionView,
    pub outcome: Option<Outcome>,
    pub read_errors: Vec<CatalogReadError>,
}

impl Snapshot {
    /// True when both catalogs were listed.
    pub fn is_complete(&self) -> bool {
        self.read_errors.is_empty()
    }
}

/// The runtime orchestrator: both catalogs and the selection workflow.
///
/// # Architecture
///
/// - **People actor** and **Restaurant actor**: one catalog each, over the same store
/// - **Selection actor**: the session state machine; reads the catalogs through their clients
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use catalog_actor::MemoryStore;
/// use restaurant_chooser::config::Config;
/// use restaurant_chooser::lifecycle::{ChooserSystem, Event};
/// use restaurant_chooser::model::PersonForm;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = ChooserSystem::new(Arc::new(MemoryStore::new()), &Config::default());
///
///     let snapshot = system
///         .dispatch(Event::AddPerson(PersonForm::new("Alice", "Smith", "me")))
///         .await?;
///     assert_eq!(snapshot.people.len(), 1);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct ChooserSystem {
    /// Client for interacting with the People actor
    pub people_client: PeopleClient,

    /// Client for interacting with the Restaurant actor
    pub restaurant_client: RestaurantClient,

    /// Client for interacting with the Selection actor
    pub selection_client: SelectionClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ChooserSystem {
    /// Creates and starts every actor over `store`.
    pub fn new(store: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        // 1. Create actors (no dependencies)
        let (people_actor, people_client) =
            crate::people_actor::new(store.clone(), config.channel_buffer);
        let (restaurant_actor, restaurant_client) =
            crate::restaurant_actor::new(store, config.channel_buffer);
        let (selection_actor, selection_client) =
            SelectionActor::new(config.channel_buffer, config.rng());

        // 2. Start actors; the selection actor gets both catalog clients as context
        let people_handle = tokio::spawn(people_actor.run());
        let restaurant_handle = tokio::spawn(restaurant_actor.run());
        let selection_handle = tokio::spawn(
            selection_actor.run((people_client.clone(), restaurant_client.clone())),
        );

        info!(buffer = config.channel_buffer, seeded = config.seed.is_some(), "System started");

        Self {
            people_client,
            restaurant_client,
            selection_client,
            handles: vec![people_handle, restaurant_handle, selection_handle],
        }
    }

    /// Creates the system over a [`JsonFileStore`] in `config.data_dir`.
    pub fn from_config(config: &Config) -> Self {
        info!(data_dir = %config.data_dir.display(), "Using file store");
        Self::new(Arc::new(JsonFileStore::new(&config.data_dir)), config)
    }

    /// Apply one event and return the resulting snapshot.
    ///
    /// `Err` means the event was not applied: a rejected form is not stored and a rejected
    /// workflow event leaves the session where it was. Once the event is applied the
    /// answer is `Ok`, even if a catalog cannot be listed for the snapshot.
    #[instrument(skip(self))]
    pub async fn dispatch(&self, event: Event) -> Result<Snapshot, ChooserError> {
        let selection_event = match event {
            Event::AddPerson(form) => {
                // Catalog events leave the session alone, so its view is read up front
                let view = self.selection_client.view().await?;
                let key = self.people_client.add_person(form).await?;
                return Ok(self.after_catalog_change(view, Outcome::PersonAdded(key)).await);
            }
            Event::DeletePerson(key) => {
                let view = self.selection_client.view().await?;
                let removed = self.people_client.remove(key).await?;
                return Ok(self.after_catalog_change(view, Outcome::Removed(removed)).await);
            }
            Event::AddRestaurant(form) => {
                let view = self.selection_client.view().await?;
                let key = self.restaurant_client.add_restaurant(form).await?;
                let outcome = Outcome::RestaurantAdded(key);
                return Ok(self.after_catalog_change(view, outcome).await);
            }
            Event::DeleteRestaurant(key) => {
                let view = self.selection_client.view().await?;
                let removed = self.restaurant_client.remove(key).await?;
                return Ok(self.after_catalog_change(view, Outcome::Removed(removed)).await);
            }
            Event::StartSelection => SelectionEvent::StartSelection,
            Event::ToggleParticipant(key) => SelectionEvent::ToggleParticipant(key),
            Event::ConfirmParticipants => SelectionEvent::ConfirmParticipants,
            Event::SetFilter(field, value) => SelectionEvent::SetFilter { field, value },
            Event::ConfirmFilter => SelectionEvent::ConfirmFilter,
            Event::RandomChoose => SelectionEvent::RandomChoose,
            Event::Accept => SelectionEvent::Accept,
            Event::Veto(key) => SelectionEvent::Veto(key),
            Event::Reset => SelectionEvent::Reset,
        };
        let view = self.selection_client.dispatch(selection_event).await?;
        Ok(self.render(view, None).await)
    }

    async fn after_catalog_change(&self, view: SelectionView, outcome: Outcome) -> Snapshot {
        debug!(?outcome, "Catalog event applied");
        self.render(view, Some(outcome)).await
    }

    /// The current state without applying an event.
    pub async fn snapshot(&self) -> Result<Snapshot, ChooserError> {
        let view = self.selection_client.view().await?;
        Ok(self.render(view, None).await)
    }

    /// Best-effort listing of both catalogs next to `selection`.
    async fn render(&self, selection: SelectionView, outcome: Option<Outcome>) -> Snapshot {
        let mut read_errors = Vec::new();
        let people = match self.people_client.list().await {
            Ok(people) => people,
            Err(e) => {
                warn!(error = %e, "People catalog unreadable for snapshot");
                read_errors.push(CatalogReadError::People(e));
                Vec::new()
            }
        };
        let restaurants = match self.restaurant_client.list().await {
            Ok(restaurants) => restaurants,
            Err(e) => {
                warn!(error = %e, "Restaurant catalog unreadable for snapshot");
                read_errors.push(CatalogReadError::Restaurants(e));
                Vec::new()
            }
        };
        Snapshot {
            people,
            restaurants,
            selection,
            outcome,
            read_errors,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor finishes the requests it has
    /// and exits. The selection actor holds clones of the catalog clients, so the catalogs
    /// stop only after it does.
    pub async fn shutdown(self) -> Result<(), ChooserError> {
        info!("Shutting down system...");

        drop(self.selection_client);
        drop(self.people_client);
        drop(self.restaurant_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(ChooserError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete");
        Ok(())
    }
}
