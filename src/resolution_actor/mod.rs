//! Name resolution against the control plane.
//!
//! The [`ResolutionActor`] turns a human-readable name plus its scope into exactly one
//! resource, or into a typed [`ActionError`]. It also offers the plain list reads that
//! the session commands need. Every operation is read-only and returns the warnings of
//! the query it sent.

pub mod error;
pub mod resolve;

pub use error::*;

use crate::clients::ControlPlaneClient;
use crate::framework::{Outcome, Query};
use crate::model::{Application, Organization, Route, Space};
use tracing::instrument;

/// Read-side actor over a [`ControlPlaneClient`].
#[derive(Clone)]
pub struct ResolutionActor {
    client: ControlPlaneClient,
}

impl ResolutionActor {
    pub fn new(client: ControlPlaneClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ControlPlaneClient {
        &self.client
    }

    /// Organization names are unique platform-wide, so no scope is sent.
    #[instrument(skip(self))]
    pub async fn get_organization_by_name(&self, name: &str) -> Outcome<Organization, ActionError> {
        resolve::resolve_unique(&self.client.organizations, name, vec![]).await
    }

    #[instrument(skip(self))]
    pub async fn get_space_by_organization_and_name(
        &self,
        organization_guid: &str,
        name: &str,
    ) -> Outcome<Space, ActionError> {
        resolve::resolve_unique(
            &self.client.spaces,
            name,
            vec![Query::organization_guid(organization_guid)],
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_application_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> Outcome<Application, ActionError> {
        resolve::resolve_unique(
            &self.client.applications,
            name,
            vec![Query::space_guid(space_guid)],
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_organization_spaces(
        &self,
        organization_guid: &str,
    ) -> Outcome<Vec<Space>, ActionError> {
        resolve::list(
            &self.client.spaces,
            vec![Query::organization_guid(organization_guid)],
        )
        .await
    }

    /// Applications bound to `route_guid`, narrowed by any extra `filters`.
    #[instrument(skip(self))]
    pub async fn get_route_applications(
        &self,
        route_guid: &str,
        filters: Vec<Query>,
    ) -> Outcome<Vec<Application>, ActionError> {
        let mut all = vec![Query::route_guid(route_guid)];
        all.extend(filters);
        resolve::list(&self.client.applications, all).await
    }

    #[instrument(skip(self))]
    pub async fn get_space_routes(&self, space_guid: &str) -> Outcome<Vec<Route>, ActionError> {
        resolve::list(&self.client.routes, vec![Query::space_guid(space_guid)]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockControlPlane;
    use crate::framework::{FrameworkError, ResourceKind, Warnings};

    fn server_error() -> FrameworkError {
        FrameworkError::Server {
            status: 500,
            code: 10001,
            description: "some error".into(),
        }
    }

    #[tokio::test]
    async fn test_single_match_returns_resource_and_warnings() {
        let mut mock = MockControlPlane::new();
        mock.spaces.expect_query().return_ok(
            vec![Space::new("space-guid", "dev", "org-guid", false)],
            vec!["warning-1", "warning-2"],
        );
        let actor = ResolutionActor::new(mock.client());

        let outcome = actor
            .get_space_by_organization_and_name("org-guid", "dev")
            .await;

        assert_eq!(
            outcome.result(),
            &Ok(Space::new("space-guid", "dev", "org-guid", false))
        );
        assert_eq!(outcome.warnings().as_slice(), ["warning-1", "warning-2"]);
        assert_eq!(
            mock.spaces.query_calls(),
            vec![vec![Query::name("dev"), Query::organization_guid("org-guid")]]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_no_match_is_not_found() {
        let mut mock = MockControlPlane::new();
        mock.organizations
            .expect_query()
            .return_ok(vec![], vec!["warning-1"]);
        let actor = ResolutionActor::new(mock.client());

        let outcome = actor.get_organization_by_name("acme").await;

        assert_eq!(
            outcome.result(),
            &Err(ActionError::NotFound {
                kind: ResourceKind::Organization,
                name: "acme".into()
            })
        );
        assert_eq!(outcome.warnings().as_slice(), ["warning-1"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_duplicate_match_is_multiple_found() {
        let mut mock = MockControlPlane::new();
        mock.applications.expect_query().return_ok(
            vec![
                Application::new("app-1", "my-app", "space-guid"),
                Application::new("app-2", "my-app", "space-guid"),
            ],
            Warnings::new(),
        );
        let actor = ResolutionActor::new(mock.client());

        let outcome = actor
            .get_application_by_name_and_space("my-app", "space-guid")
            .await;

        assert_eq!(
            outcome.result(),
            &Err(ActionError::MultipleFound {
                kind: ResourceKind::Application,
                name: "my-app".into(),
                scope: vec![Query::space_guid("space-guid")],
            })
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_server_error_passes_through_with_warnings() {
        let mut mock = MockControlPlane::new();
        mock.organizations
            .expect_query()
            .return_err(server_error(), vec!["warning-1"]);
        let actor = ResolutionActor::new(mock.client());

        let outcome = actor.get_organization_by_name("acme").await;

        assert_eq!(outcome.result(), &Err(ActionError::Remote(server_error())));
        assert_eq!(outcome.warnings().as_slice(), ["warning-1"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_empty_name_sends_nothing() {
        let mock = MockControlPlane::new();
        let actor = ResolutionActor::new(mock.client());

        let outcome = actor.get_organization_by_name("").await;

        assert_eq!(
            outcome.result(),
            &Err(ActionError::EmptyName {
                kind: ResourceKind::Organization
            })
        );
        assert_eq!(mock.call_count(), 0);
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_reads_keep_server_order() {
        let mut mock = MockControlPlane::new();
        mock.spaces.expect_query().return_ok(
            vec![
                Space::new("b", "beta", "org-guid", false),
                Space::new("a", "alpha", "org-guid", true),
            ],
            vec!["warning-1"],
        );
        mock.routes.expect_query().return_ok(vec![], Warnings::new());
        mock.applications.expect_query().return_ok(
            vec![Application::new("app-1", "web", "space-guid")],
            Warnings::new(),
        );
        let actor = ResolutionActor::new(mock.client());

        let spaces = actor.get_organization_spaces("org-guid").await;
        let names: Vec<String> = spaces
            .into_result()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["beta", "alpha"]);

        let routes = actor.get_space_routes("space-guid").await;
        assert_eq!(routes.result(), &Ok(vec![]));

        let apps = actor
            .get_route_applications("route-guid", vec![Query::name("web")])
            .await;
        assert_eq!(apps.into_result().unwrap().len(), 1);
        assert_eq!(
            mock.applications.query_calls(),
            vec![vec![Query::route_guid("route-guid"), Query::name("web")]]
        );
        mock.verify();
    }
}
