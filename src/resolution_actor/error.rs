//! Error types for the Resolution actor.

use crate::framework::{FrameworkError, Query, ResourceKind};
use thiserror::Error;

/// Errors that can occur while turning a name into a resource.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    /// No resource carries the requested name in the given scope.
    #[error("{kind} '{name}' not found.")]
    NotFound { kind: ResourceKind, name: String },

    /// More than one resource carries a name that should be unique in its scope.
    #[error("Multiple {} named '{}' found{}.", .kind.plural(), .name, describe_scope(.scope))]
    MultipleFound {
        kind: ResourceKind,
        name: String,
        scope: Vec<Query>,
    },

    /// A lookup was requested with a blank name.
    #[error("{kind} name must not be empty.")]
    EmptyName { kind: ResourceKind },

    /// The control plane or the transport failed.
    #[error(transparent)]
    Remote(#[from] FrameworkError),
}

fn describe_scope(scope: &[Query]) -> String {
    if scope.is_empty() {
        return String::new();
    }
    let filters: Vec<String> = scope.iter().map(ToString::to_string).collect();
    format!(" in {}", filters.join(", "))
}
