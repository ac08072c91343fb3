//! # Generic Client
//!
//! This module defines the generic client for one resource collection.

use crate::framework::{
    FrameworkError, Outcome, Query, RemoteResource, ResourceRequest, Warnings,
};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// ## ResourceClient
///
/// A type-safe, async handle on a single resource collection. Requests are forwarded over
/// a Tokio mpsc channel and answered through a oneshot channel carrying an [`Outcome`].
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Never loses warnings** – channel failures come back as an error outcome with an
///   empty warning list rather than a bare error.
#[derive(Clone)]
pub struct ResourceClient<T: RemoteResource> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: RemoteResource> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    /// Lists every resource matching all `filters`, in server order.
    #[instrument(skip(self), fields(kind = %T::KIND))]
    pub async fn query(&self, filters: Vec<Query>) -> Outcome<Vec<T>, FrameworkError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        if self
            .sender
            .send(ResourceRequest::Query {
                filters,
                respond_to,
            })
            .await
            .is_err()
        {
            return Outcome::err(FrameworkError::ActorClosed, Warnings::new());
        }
        response
            .await
            .unwrap_or_else(|_| Outcome::err(FrameworkError::ActorDropped, Warnings::new()))
    }

    /// Applies `update` to the resource identified by `guid`.
    #[instrument(skip(self), fields(kind = %T::KIND))]
    pub async fn update(&self, guid: String, update: T::Update) -> Outcome<T, FrameworkError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        if self
            .sender
            .send(ResourceRequest::Update {
                guid,
                update,
                respond_to,
            })
            .await
            .is_err()
        {
            return Outcome::err(FrameworkError::ActorClosed, Warnings::new());
        }
        response
            .await
            .unwrap_or_else(|_| Outcome::err(FrameworkError::ActorDropped, Warnings::new()))
    }
}
