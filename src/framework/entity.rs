//! # RemoteResource Trait
//!
//! The `RemoteResource` trait is the contract every control-plane resource (Organization,
//! Space, Application, Route) implements so that one generic client, one generic resolver
//! and one in-memory actor can serve all of them.
//!
//! # Architecture Note
//! The set of resource kinds is closed ([`ResourceKind`]). Each resource names its kind
//! through an associated constant, which lets generic code report *which* kind of lookup
//! failed without per-kind branching.
//!
//! We use an associated type (`Update`) for the write payload, so an application update
//! can never be sent to the spaces collection.

use crate::framework::{FrameworkError, Query};
use std::fmt::{self, Debug, Display};

/// The closed set of resource collections exposed by the control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Organization,
    Space,
    Application,
    Route,
}

impl ResourceKind {
    /// Lower-case plural used in collection paths and messages.
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Organization => "organizations",
            ResourceKind::Space => "spaces",
            ResourceKind::Application => "applications",
            ResourceKind::Route => "routes",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::Organization => "Organization",
            ResourceKind::Space => "Space",
            ResourceKind::Application => "Application",
            ResourceKind::Route => "Route",
        };
        f.write_str(label)
    }
}

/// Trait that any resource served by the control plane must implement.
pub trait RemoteResource: Clone + Debug + Send + Sync + 'static {
    /// Which collection this resource lives in.
    const KIND: ResourceKind;

    /// The attribute changes accepted by an update request.
    type Update: Clone + Debug + Send + Sync;

    /// The opaque stable identifier.
    fn guid(&self) -> &str;

    /// The human-readable name used for lookups.
    fn name(&self) -> &str;

    /// Whether this resource satisfies a single filter.
    fn matches(&self, query: &Query) -> bool;

    /// Applies an update payload in place.
    ///
    /// Used by the in-memory [`ResourceActor`](crate::framework::ResourceActor); a remote
    /// server performs the equivalent on its side.
    fn apply_update(&mut self, update: Self::Update) -> Result<(), FrameworkError>;

    /// Whether this resource satisfies every filter in `filters`.
    fn matches_all(&self, filters: &[Query]) -> bool {
        filters.iter().all(|query| self.matches(query))
    }
}
