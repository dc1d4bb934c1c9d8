//! # Generic Client
//!
//! This module defines the generic client for communicating with catalog actors.

use crate::entity::CatalogEntity;
use crate::error::FrameworkError;
use crate::message::CatalogRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `CatalogActor`.
///
/// Holds only the sending half of the actor's channel, so cloning is cheap and clones can
/// be handed to other actors. The actor stops once every clone is dropped.
pub struct CatalogClient<T: CatalogEntity> {
    sender: mpsc::Sender<CatalogRequest<T>>,
}

// Derived Clone would require `T: Clone` on the request type.
impl<T: CatalogEntity> Clone for CatalogClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: CatalogEntity> CatalogClient<T> {
    pub fn new(sender: mpsc::Sender<CatalogRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, key: T::Key) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::Get { key, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn add(&self, params: T::Create) -> Result<T::Key, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::Add { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn remove(&self, key: T::Key) -> Result<bool, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::Remove { key, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
