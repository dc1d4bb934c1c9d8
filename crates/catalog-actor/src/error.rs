//! # Framework Errors
//!
//! Errors raised by the catalog plumbing itself, independent of any record type.

use crate::store::StoreError;

/// Errors that can occur within the catalog framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// The collection could not be read or decoded. Nothing was changed.
    #[error("Storage read failed: {0}")]
    StorageRead(#[source] StoreError),
    /// The updated collection could not be written back. The stored copy is unchanged.
    #[error("Storage write failed: {0}")]
    StorageWrite(#[source] StoreError),
    /// The record type rejected the request (for example a validation failure).
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// True for failures of the underlying store, as opposed to channel or entity errors.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageRead(_) | Self::StorageWrite(_))
    }
}
