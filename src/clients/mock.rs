//! A [`ControlPlaneClient`] whose four collections are backed by [`MockClient`]s.

use crate::clients::ControlPlaneClient;
use crate::framework::mock::MockClient;
use crate::model::{Application, Organization, Route, Space};

/// Scripted stand-in for the whole control plane.
///
/// Queue expectations on the individual collections, hand [`MockControlPlane::client`]
/// to the code under test, then call [`MockControlPlane::verify`].
#[derive(Default)]
pub struct MockControlPlane {
    pub organizations: MockClient<Organization>,
    pub spaces: MockClient<Space>,
    pub applications: MockClient<Application>,
    pub routes: MockClient<Route>,
}

impl MockControlPlane {
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(&self) -> ControlPlaneClient {
        ControlPlaneClient::new(
            self.organizations.client(),
            self.spaces.client(),
            self.applications.client(),
            self.routes.client(),
        )
    }

    /// Total number of requests received across all collections.
    pub fn call_count(&self) -> usize {
        self.organizations.call_count()
            + self.spaces.call_count()
            + self.applications.call_count()
            + self.routes.call_count()
    }

    pub fn verify(&self) {
        self.organizations.verify();
        self.spaces.verify();
        self.applications.verify();
        self.routes.verify();
    }
}
