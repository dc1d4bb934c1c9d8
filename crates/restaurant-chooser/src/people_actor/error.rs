//! Error types for the People actor.

use crate::validation::ValidationError;
use catalog_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during people catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PeopleError {
    /// The submitted form was rejected. Nothing was stored.
    #[error("Invalid person: {0}")]
    Validation(#[from] ValidationError),

    /// The people collection could not be read or written.
    #[error("People storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for PeopleError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<ValidationError>() {
                Ok(validation) => PeopleError::Validation(*validation),
                Err(other) => PeopleError::ActorCommunicationError(other.to_string()),
            },
            e if e.is_storage() => PeopleError::Storage(e.to_string()),
            e => PeopleError::ActorCommunicationError(e.to_string()),
        }
    }
}
