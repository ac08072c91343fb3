//! # Generic Messages
//!
//! This module defines the request types sent from a `ResourceClient` to whatever serves
//! the collection (a `ResourceActor` or a `MockClient`).

use crate::framework::{FrameworkError, Outcome, Query, RemoteResource};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel. Warnings travel with the result.
pub type Response<T> = oneshot::Sender<Outcome<T, FrameworkError>>;

/// Request sent to a resource collection.
///
/// The control plane contract is read-mostly: a filtered list and a single-attribute
/// update keyed by GUID. Creation and deletion are not part of this client.
#[derive(Debug)]
pub enum ResourceRequest<T: RemoteResource> {
    Query {
        filters: Vec<Query>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        guid: String,
        update: T::Update,
        respond_to: Response<T>,
    },
}
