//! Error types for the selection workflow.
//!
//! Every error leaves the session in the state it was in before the event.

use super::state::Phase;
use crate::model::PersonKey;
use crate::people_actor::PeopleError;
use crate::restaurant_actor::RestaurantError;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectionError {
    #[error("There are no people to choose from")]
    NoPeople,

    #[error("There are no restaurants to choose from")]
    NoRestaurants,

    #[error("Select at least one participant")]
    NoOneSelected,

    #[error("No restaurants match the filter")]
    NoMatches,

    #[error("No vetoes left")]
    NoVetoesLeft,

    #[error("Unknown person: {0}")]
    UnknownPerson(PersonKey),

    #[error("Unknown participant: {0}")]
    UnknownParticipant(PersonKey),

    #[error("Participant {0} has already vetoed")]
    AlreadyVetoed(PersonKey),

    /// The event does not apply in the current phase.
    #[error("{event} is not valid while {state}")]
    InvalidEvent { event: &'static str, state: Phase },

    #[error("Invalid filter: {0}")]
    Validation(#[from] ValidationError),

    /// The people catalog could not be read. The transition was not applied.
    #[error(transparent)]
    People(#[from] PeopleError),

    /// The restaurant catalog could not be read. The transition was not applied.
    #[error(transparent)]
    Restaurants(#[from] RestaurantError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
