//! Error types for the Restaurant actor.

use crate::validation::ValidationError;
use catalog_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during restaurant catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The submitted form was rejected. Nothing was stored.
    #[error("Invalid restaurant: {0}")]
    Validation(#[from] ValidationError),

    /// The restaurant collection could not be read or written.
    #[error("Restaurant storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RestaurantError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<ValidationError>() {
                Ok(validation) => RestaurantError::Validation(*validation),
                Err(other) => RestaurantError::ActorCommunicationError(other.to_string()),
            },
            e if e.is_storage() => RestaurantError::Storage(e.to_string()),
            e => RestaurantError::ActorCommunicationError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Field;
    use catalog_actor::StoreError;

    #[test]
    fn test_framework_errors_map_to_catalog_errors() {
        let validation = ValidationError::new(Field::Phone, "Please enter a valid phone number");
        let err = RestaurantError::from(FrameworkError::EntityError(Box::new(validation.clone())));
        assert_eq!(err, RestaurantError::Validation(validation));

        let err = RestaurantError::from(FrameworkError::StorageWrite(StoreError::Unavailable(
            "disk full".to_string(),
        )));
        assert!(matches!(err, RestaurantError::Storage(msg) if msg.contains("disk full")));

        let err = RestaurantError::from(FrameworkError::ActorClosed);
        assert!(matches!(err, RestaurantError::ActorCommunicationError(_)));
    }
}
