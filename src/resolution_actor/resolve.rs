//! Generic resolve-by-filter-set over every [`RemoteResource`] kind.

use crate::framework::{Outcome, Query, RemoteResource, ResourceClient, Warnings};
use crate::resolution_actor::ActionError;
use tracing::debug;

/// Resolves `name` within `scope` to exactly one resource.
///
/// Sends a single query: the name filter first, then one filter per scoping identifier.
/// Cardinality is checked here rather than trusted to the server, so a duplicate name is
/// reported as [`ActionError::MultipleFound`] instead of silently picking the first hit.
pub async fn resolve_unique<T: RemoteResource>(
    client: &ResourceClient<T>,
    name: &str,
    scope: Vec<Query>,
) -> Outcome<T, ActionError> {
    if name.is_empty() {
        return Outcome::err(ActionError::EmptyName { kind: T::KIND }, Warnings::new());
    }

    let mut filters = Vec::with_capacity(scope.len() + 1);
    filters.push(Query::name(name));
    filters.extend(scope.iter().cloned());

    let (result, warnings) = client.query(filters).await.into_parts();
    let result = result.map_err(ActionError::from).and_then(|mut found| {
        debug!(kind = %T::KIND, %name, count = found.len(), "Resolved");
        match (found.pop(), found.is_empty()) {
            (Some(resource), true) => Ok(resource),
            (None, _) => Err(ActionError::NotFound {
                kind: T::KIND,
                name: name.to_string(),
            }),
            (Some(_), false) => Err(ActionError::MultipleFound {
                kind: T::KIND,
                name: name.to_string(),
                scope,
            }),
        }
    });
    Outcome::new(result, warnings)
}

/// Lists every resource matching `filters`. An empty list is not an error.
pub async fn list<T: RemoteResource>(
    client: &ResourceClient<T>,
    filters: Vec<Query>,
) -> Outcome<Vec<T>, ActionError> {
    client.query(filters).await.map_err(ActionError::from)
}
