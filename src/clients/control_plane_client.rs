use crate::framework::ResourceClient;
use crate::model::{Application, Organization, Route, Space};

/// One client per resource collection exposed by the control plane.
///
/// Cloning is cheap: each field only holds a channel sender. The resolution and mutation
/// actors receive a clone and never talk to the collections any other way.
#[derive(Clone)]
pub struct ControlPlaneClient {
    pub organizations: ResourceClient<Organization>,
    pub spaces: ResourceClient<Space>,
    pub applications: ResourceClient<Application>,
    pub routes: ResourceClient<Route>,
}

impl ControlPlaneClient {
    pub fn new(
        organizations: ResourceClient<Organization>,
        spaces: ResourceClient<Space>,
        applications: ResourceClient<Application>,
        routes: ResourceClient<Route>,
    ) -> Self {
        Self {
            organizations,
            spaces,
            applications,
            routes,
        }
    }
}
