//! Top-level error type for the application.

use crate::config::ConfigError;
use crate::people_actor::PeopleError;
use crate::restaurant_actor::RestaurantError;
use crate::selection::SelectionError;
use thiserror::Error;

/// Any error surfaced by [`ChooserSystem`](crate::lifecycle::ChooserSystem) or the binary.
#[derive(Debug, Error)]
pub enum ChooserError {
    #[error(transparent)]
    People(#[from] PeopleError),

    #[error(transparent)]
    Restaurant(#[from] RestaurantError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An actor task panicked or was cancelled during shutdown.
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}
