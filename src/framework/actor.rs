//! # In-Memory Resource Actor
//!
//! `ResourceActor` serves one resource collection from memory. It is the "server" half
//! of a [`ResourceClient`]: it owns the records and processes requests sequentially, so
//! the store needs no locking.
//!
//! The demo binary and the integration tests use it as a stand-in control plane. It
//! honours the same contract a remote server does: filtered lists in insertion order,
//! updates keyed by GUID, and warnings attached to every response.

use crate::framework::{
    FrameworkError, Outcome, RemoteResource, ResourceClient, ResourceRequest, Warnings,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that serves a collection of resources.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Seed**: optionally add records and response warnings.
/// 3.  **Run**: spawn `actor.run()` in a background task.
///
/// ```rust
/// use platform_session::framework::{Query, ResourceActor};
/// use platform_session::model::Organization;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Organization>::new(10);
///     let actor = actor.with_records(vec![Organization::new("org-guid", "my-org")]);
///     tokio::spawn(actor.run());
///
///     let outcome = client.query(vec![Query::name("my-org")]).await;
///     assert_eq!(outcome.into_result().unwrap().len(), 1);
/// }
/// ```
pub struct ResourceActor<T: RemoteResource> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    warnings: Warnings,
}

impl<T: RemoteResource> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            warnings: Warnings::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Seeds the collection. Records are served in the given order.
    pub fn with_records(mut self, records: impl IntoIterator<Item = T>) -> Self {
        self.store.extend(records);
        self
    }

    /// Attaches `warnings` to every response this actor sends.
    pub fn with_warnings(mut self, warnings: impl Into<Warnings>) -> Self {
        self.warnings = warnings.into();
        self
    }

    /// Runs the actor's event loop, processing requests until every client is dropped.
    pub async fn run(mut self) {
        let kind = T::KIND;
        info!(%kind, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Query {
                    filters,
                    respond_to,
                } => {
                    let matches: Vec<T> = self
                        .store
                        .iter()
                        .filter(|item| item.matches_all(&filters))
                        .cloned()
                        .collect();
                    debug!(%kind, ?filters, count = matches.len(), "Query");
                    let _ = respond_to.send(Outcome::ok(matches, self.warnings.clone()));
                }
                ResourceRequest::Update {
                    guid,
                    update,
                    respond_to,
                } => {
                    debug!(%kind, %guid, ?update, "Update");
                    let Some(item) = self.store.iter_mut().find(|item| item.guid() == guid)
                    else {
                        warn!(%kind, %guid, "Not found");
                        let _ = respond_to.send(Outcome::err(
                            FrameworkError::NotFound(guid),
                            self.warnings.clone(),
                        ));
                        continue;
                    };
                    match item.apply_update(update) {
                        Ok(()) => {
                            info!(%kind, %guid, "Updated");
                            let _ = respond_to
                                .send(Outcome::ok(item.clone(), self.warnings.clone()));
                        }
                        Err(e) => {
                            warn!(%kind, %guid, error = %e, "Update failed");
                            let _ = respond_to.send(Outcome::err(e, self.warnings.clone()));
                        }
                    }
                }
            }
        }

        info!(%kind, size = self.store.len(), "Shutdown");
    }
}
