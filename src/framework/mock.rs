//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered from
//! a queue of expectations instead of a server. Every request is recorded, so tests can
//! assert exactly which filters were sent and how many writes were issued.
//!
//! ## When to use Mocks vs the In-Memory Actor
//!
//! | Feature | MockClient | ResourceActor |
//! |---------|------------|---------------|
//! | **Determinism** | Scripted responses | Real filtering over seeded records |
//! | **Call recording** | Yes | No |
//! | **Error Injection** | Easy (`return_err`) | Only `NotFound` on update |
//! | **Use Case** | Actor and command logic | End-to-end flows |
//!
//! ## Example
//!
//! ```rust
//! use platform_session::framework::mock::MockClient;
//! use platform_session::framework::{FrameworkError, Query, Warnings};
//! use platform_session::model::Organization;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Organization>::new();
//!     mock.expect_query()
//!         .return_ok(vec![Organization::new("org-guid", "my-org")], vec!["warning-1"]);
//!     mock.expect_query().return_err(
//!         FrameworkError::Server { status: 500, code: 10001, description: "boom".into() },
//!         Warnings::new(),
//!     );
//!
//!     let client = mock.client();
//!     let first = client.query(vec![Query::name("my-org")]).await;
//!     assert_eq!(first.warnings().as_slice(), ["warning-1"]);
//!     assert!(client.query(vec![]).await.is_err());
//!
//!     assert_eq!(mock.query_calls()[0], vec![Query::name("my-org")]);
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use the fluent [`MockClient`] API, or [`create_mock_client`] with [`expect_query`] /
//! [`expect_update`] to drive the responder by hand.

use crate::framework::{
    FrameworkError, Outcome, Query, RemoteResource, ResourceClient, ResourceRequest, Response,
    Warnings,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: RemoteResource> {
    Query {
        response: Outcome<Vec<T>, FrameworkError>,
    },
    Update {
        response: Outcome<T, FrameworkError>,
    },
}

/// A request observed by a [`MockClient`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest<U> {
    Query(Vec<Query>),
    Update { guid: String, update: U },
}

struct MockState<T: RemoteResource> {
    expectations: VecDeque<Expectation<T>>,
    recorded: Vec<RecordedRequest<T::Update>>,
    unexpected: Vec<String>,
}

type Shared<T> = Arc<Mutex<MockState<T>>>;

fn lock<T: RemoteResource>(state: &Shared<T>) -> MutexGuard<'_, MockState<T>> {
    // A panicking test thread may poison the lock; the state is still usable for reporting.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// (or arrives when none is left) is answered with a `500` server error and remembered,
/// and [`MockClient::verify`] then fails.
pub struct MockClient<T: RemoteResource> {
    client: ResourceClient<T>,
    state: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: RemoteResource> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RemoteResource> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: Shared<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            recorded: Vec::new(),
            unexpected: Vec::new(),
        }));
        let task_state = state.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = lock(&task_state);
                let expectation = state.expectations.pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Query {
                            filters,
                            respond_to,
                        },
                        Some(Expectation::Query { response }),
                    ) => {
                        state.recorded.push(RecordedRequest::Query(filters));
                        drop(state);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update {
                            guid,
                            update,
                            respond_to,
                        },
                        Some(Expectation::Update { response }),
                    ) => {
                        state.recorded.push(RecordedRequest::Update { guid, update });
                        drop(state);
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let description = match &request {
                            ResourceRequest::Query { filters, .. } => {
                                format!("query {:?} on {}", filters, T::KIND.plural())
                            }
                            ResourceRequest::Update { guid, .. } => {
                                format!("update {} on {}", guid, T::KIND.plural())
                            }
                        };
                        // Put a mismatched expectation back so verify() reports it too.
                        if let Some(expectation) = expectation {
                            state.expectations.push_front(expectation);
                        }
                        state.unexpected.push(description.clone());
                        drop(state);
                        reject(request, description);
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `query` operation.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<T> {
        QueryExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest<T::Update>> {
        lock(&self.state).recorded.clone()
    }

    /// The filter sets of every `query` received so far.
    pub fn query_calls(&self) -> Vec<Vec<Query>> {
        lock(&self.state)
            .recorded
            .iter()
            .filter_map(|request| match request {
                RecordedRequest::Query(filters) => Some(filters.clone()),
                RecordedRequest::Update { .. } => None,
            })
            .collect()
    }

    /// The `(guid, update)` pairs of every `update` received so far.
    pub fn update_calls(&self) -> Vec<(String, T::Update)> {
        lock(&self.state)
            .recorded
            .iter()
            .filter_map(|request| match request {
                RecordedRequest::Update { guid, update } => Some((guid.clone(), update.clone())),
                RecordedRequest::Query(_) => None,
            })
            .collect()
    }

    /// Total number of requests received, expected or not.
    pub fn call_count(&self) -> usize {
        let state = lock(&self.state);
        state.recorded.len() + state.unexpected.len()
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

fn reject<T: RemoteResource>(request: ResourceRequest<T>, description: String) {
    let error = FrameworkError::Server {
        status: 500,
        code: 0,
        description: format!("unexpected request: {}", description),
    };
    match request {
        ResourceRequest::Query { respond_to, .. } => {
            let _ = respond_to.send(Outcome::err(error, Warnings::new()));
        }
        ResourceRequest::Update { respond_to, .. } => {
            let _ = respond_to.send(Outcome::err(error, Warnings::new()));
        }
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<T: RemoteResource> {
    state: Shared<T>,
}

impl<T: RemoteResource> QueryExpectationBuilder<T> {
    /// Sets the expectation to return a result set.
    pub fn return_ok(self, value: Vec<T>, warnings: impl Into<Warnings>) {
        self.push(Outcome::ok(value, warnings));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError, warnings: impl Into<Warnings>) {
        self.push(Outcome::err(error, warnings));
    }

    fn push(self, response: Outcome<Vec<T>, FrameworkError>) {
        lock(&self.state)
            .expectations
            .push_back(Expectation::Query { response });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: RemoteResource> {
    state: Shared<T>,
}

impl<T: RemoteResource> UpdateExpectationBuilder<T> {
    /// Sets the expectation to return the updated resource.
    pub fn return_ok(self, value: T, warnings: impl Into<Warnings>) {
        self.push(Outcome::ok(value, warnings));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError, warnings: impl Into<Warnings>) {
        self.push(Outcome::err(error, warnings));
    }

    fn push(self, response: Outcome<T, FrameworkError>) {
        lock(&self.state)
            .expectations
            .push_back(Expectation::Update { response });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when a test needs to hold a response back or inspect a request before
/// answering it; otherwise prefer [`MockClient`].
pub fn create_mock_client<T: RemoteResource>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<T: RemoteResource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<Query>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query {
            filters,
            respond_to,
        }) => Some((filters, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: RemoteResource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            guid,
            update,
            respond_to,
        }) => Some((guid, update, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Organization, OrganizationUpdate};

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Organization>(10);

        let query_task = tokio::spawn(async move { client.query(vec![Query::name("o")]).await });

        let (filters, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert_eq!(filters, vec![Query::name("o")]);
        responder
            .send(Outcome::ok(vec![], vec!["held back"]))
            .unwrap();

        let outcome = query_task.await.unwrap();
        assert_eq!(outcome.warnings().as_slice(), ["held back"]);
    }

    #[tokio::test]
    async fn test_mock_client_records_requests() {
        let mut mock = MockClient::<Organization>::new();
        mock.expect_query()
            .return_ok(vec![Organization::new("org-guid", "org")], Warnings::new());
        mock.expect_update().return_ok(
            Organization::new("org-guid", "renamed"),
            vec!["update-warning"],
        );

        let client = mock.client();
        let _ = client.query(vec![Query::name("org")]).await;
        let updated = client
            .update("org-guid".to_string(), OrganizationUpdate::rename("renamed"))
            .await;
        assert_eq!(updated.warnings().as_slice(), ["update-warning"]);

        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.query_calls(), vec![vec![Query::name("org")]]);
        assert_eq!(
            mock.update_calls(),
            vec![("org-guid".to_string(), OrganizationUpdate::rename("renamed"))]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_is_rejected() {
        let mock = MockClient::<Organization>::new();
        let outcome = mock.client().query(vec![]).await;
        assert!(matches!(
            outcome.result(),
            Err(FrameworkError::Server { status: 500, .. })
        ));
        assert_eq!(mock.call_count(), 1);
        assert!(mock.query_calls().is_empty());
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected requests")]
    async fn test_verify_fails_on_unexpected_request() {
        let mut mock = MockClient::<Organization>::new();
        mock.expect_update()
            .return_ok(Organization::new("g", "n"), Warnings::new());
        let _ = mock.client().query(vec![]).await;
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_fails_on_leftover_expectation() {
        let mut mock = MockClient::<Organization>::new();
        mock.expect_query().return_ok(vec![], Warnings::new());
        mock.verify();
    }
}
