//! Desired-state changes the [`MutationActor`](crate::mutation_actor::MutationActor) can apply.
//!
//! A [`Mutation`] knows how to compare itself with the current state of a resource and
//! how to turn itself into an update payload for that resource's collection.

use crate::framework::RemoteResource;
use crate::model::{Application, ApplicationUpdate, HealthCheckType, Space, SpaceUpdate};
use std::fmt::Debug;

/// A single attribute change on one resource kind.
pub trait Mutation: Debug + Send {
    type Resource: RemoteResource;

    /// Whether `resource` already has the desired value.
    fn is_satisfied_by(&self, resource: &Self::Resource) -> bool;

    fn into_update(self) -> <Self::Resource as RemoteResource>::Update;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetHealthCheckType(pub HealthCheckType);

impl Mutation for SetHealthCheckType {
    type Resource = Application;

    fn is_satisfied_by(&self, application: &Application) -> bool {
        application.health_check_type == self.0
    }

    fn into_update(self) -> ApplicationUpdate {
        ApplicationUpdate::health_check_type(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetAllowSsh(pub bool);

impl Mutation for SetAllowSsh {
    type Resource = Space;

    fn is_satisfied_by(&self, space: &Space) -> bool {
        space.allow_ssh == self.0
    }

    fn into_update(self) -> SpaceUpdate {
        SpaceUpdate::allow_ssh(self.0)
    }
}

/// What a conditional update did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<T> {
    /// The resource already had the desired value; nothing was written.
    Unchanged(T),
    /// One update was sent; holds the resource as returned by the server.
    Updated(T),
}

impl<T> Change<T> {
    pub fn was_updated(&self) -> bool {
        matches!(self, Change::Updated(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Change::Unchanged(resource) | Change::Updated(resource) => resource,
        }
    }
}
