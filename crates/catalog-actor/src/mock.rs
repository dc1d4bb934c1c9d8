//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`CatalogClient<T>`] whose requests are answered from a
//! queue of expectations instead of a store. Code that talks to a catalog (for example the
//! selection workflow) can then be tested deterministically, including failures that are
//! awkward to provoke with a real store.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (spawns a task, touches the store) |
//! | **State** | No real state (expectations) | Real collection in a store |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Needs a broken store |
//!
//! ## Example
//!
//! ```rust
//! use catalog_actor::mock::MockClient;
//! use catalog_actor::{CatalogEntity, FrameworkError};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Tag { key: String }
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! impl CatalogEntity for Tag {
//!     type Key = String; type Create = (); type Error = TagError;
//!     const COLLECTION: &'static str = "tags";
//!     fn key(&self) -> &String { &self.key }
//!     fn from_create_params(key: String, _: ()) -> Result<Self, TagError> { Ok(Self { key }) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_list().return_ok(vec![Tag { key: "t_1".into() }]);
//!     mock.expect_remove("t_2".to_string()).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!     assert!(matches!(client.remove("t_2".into()).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw receiver, or the fluent
//! [`MockClient`] API.

use crate::client::CatalogClient;
use crate::entity::CatalogEntity;
use crate::error::FrameworkError;
use crate::message::CatalogRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response the mock should give to it.
enum Expectation<T: CatalogEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        key: T::Key,
        response: Result<Option<T>, FrameworkError>,
    },
    Add {
        response: Result<T::Key, FrameworkError>,
    },
    Remove {
        key: T::Key,
        response: Result<bool, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// (wrong operation or wrong key) panics the mock task, which the caller observes as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: CatalogEntity> {
    client: CatalogClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: CatalogEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CatalogRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (CatalogRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CatalogRequest::Get { key, respond_to },
                        Some(Expectation::Get {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "Get called with unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        CatalogRequest::Add { respond_to, .. },
                        Some(Expectation::Add { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CatalogRequest::Remove { key, respond_to },
                        Some(Expectation::Remove {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "Remove called with unexpected key");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: CatalogClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CatalogClient<T> {
        self.client.clone()
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    /// Expects a `get` operation for `key`.
    pub fn expect_get(&mut self, key: T::Key) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { key, response }
        })
    }

    /// Expects an `add` operation.
    pub fn expect_add(&mut self) -> ExpectationBuilder<T, T::Key> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Add {
            response,
        })
    }

    /// Expects a `remove` operation for `key`.
    pub fn expect_remove(&mut self, key: T::Key) -> ExpectationBuilder<T, bool> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Remove { key, response }
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that completes one expectation with its response.
pub struct ExpectationBuilder<T: CatalogEntity, R> {
    expectations: Expectations<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: CatalogEntity, R> ExpectationBuilder<T, R> {
    fn new<F>(expectations: Expectations<T>, make: F) -> Self
    where
        F: FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls each request off the receiver with the `expect_*`
/// helpers below, inspects the payload and answers through the returned responder.
pub fn create_mock_client<T: CatalogEntity>(
    buffer_size: usize,
) -> (CatalogClient<T>, mpsc::Receiver<CatalogRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: CatalogEntity>(
    receiver: &mut mpsc::Receiver<CatalogRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(CatalogRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add<T: CatalogEntity>(
    receiver: &mut mpsc::Receiver<CatalogRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Key, FrameworkError>>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Add { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Remove request
pub async fn expect_remove<T: CatalogEntity>(
    receiver: &mut mpsc::Receiver<CatalogRequest<T>>,
) -> Option<(T::Key, oneshot::Sender<Result<bool, FrameworkError>>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Remove { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Tag {
        key: String,
        label: String,
    }

    #[derive(Debug)]
    struct TagCreate {
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tag error")]
    struct TagError;

    impl CatalogEntity for Tag {
        type Key = String;
        type Create = TagCreate;
        type Error = TagError;
        const COLLECTION: &'static str = "tags";

        fn key(&self) -> &String {
            &self.key
        }

        fn from_create_params(key: String, params: TagCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                key,
                label: params.label,
            })
        }
    }

    fn tag(key: &str, label: &str) -> Tag {
        Tag {
            key: key.to_string(),
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Tag>(10);

        let add_task = tokio::spawn(async move {
            client
                .add(TagCreate {
                    label: "lunch".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_add(&mut receiver)
            .await
            .expect("Expected Add request");
        assert_eq!(payload.label, "lunch");
        responder.send(Ok("t_1".to_string())).unwrap();

        let result = add_task.await.unwrap();
        assert!(matches!(result, Ok(key) if key == "t_1"));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Tag>::new();

        mock.expect_add().return_ok("t_1".to_string());
        mock.expect_get("t_1".to_string())
            .return_ok(Some(tag("t_1", "lunch")));
        mock.expect_list()
            .return_ok(vec![tag("t_1", "lunch"), tag("t_2", "dinner")]);
        mock.expect_remove("t_3".to_string()).return_ok(false);

        let client = mock.client();

        let key = client
            .add(TagCreate {
                label: "lunch".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(key, "t_1");

        let fetched = client.get(key).await.unwrap();
        assert_eq!(fetched.unwrap().label, "lunch");

        assert_eq!(client.list().await.unwrap().len(), 2);
        assert!(!client.remove("t_3".to_string()).await.unwrap());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_injects_errors() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let result = mock.client().list().await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }
}
