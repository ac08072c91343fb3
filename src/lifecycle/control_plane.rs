use crate::clients::ControlPlaneClient;
use crate::framework::{ResourceActor, Warnings};
use crate::model::{Application, Organization, Route, Space};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Records to serve, and warnings to attach to every response.
#[derive(Debug, Clone, Default)]
pub struct ControlPlaneSeed {
    pub organizations: Vec<Organization>,
    pub spaces: Vec<Space>,
    pub applications: Vec<Application>,
    pub routes: Vec<Route>,
    pub warnings: Warnings,
}

/// An in-memory control plane: one actor task per resource collection.
///
/// # Example
///
/// ```ignore
/// let control_plane = ControlPlane::start(seed);
/// let resolver = ResolutionActor::new(control_plane.client.clone());
/// // ... run commands ...
/// control_plane.shutdown().await?;
/// ```
pub struct ControlPlane {
    pub client: ControlPlaneClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl ControlPlane {
    /// Spawns the four collection actors. Must be called inside a Tokio runtime.
    pub fn start(seed: ControlPlaneSeed) -> Self {
        let (organizations, organization_client) = ResourceActor::new(32);
        let (spaces, space_client) = ResourceActor::new(32);
        let (applications, application_client) = ResourceActor::new(32);
        let (routes, route_client) = ResourceActor::new(32);

        let handles = vec![
            tokio::spawn(
                organizations
                    .with_records(seed.organizations)
                    .with_warnings(seed.warnings.clone())
                    .run(),
            ),
            tokio::spawn(
                spaces
                    .with_records(seed.spaces)
                    .with_warnings(seed.warnings.clone())
                    .run(),
            ),
            tokio::spawn(
                applications
                    .with_records(seed.applications)
                    .with_warnings(seed.warnings.clone())
                    .run(),
            ),
            tokio::spawn(
                routes
                    .with_records(seed.routes)
                    .with_warnings(seed.warnings)
                    .run(),
            ),
        ];

        Self {
            client: ControlPlaneClient::new(
                organization_client,
                space_client,
                application_client,
                route_client,
            ),
            handles,
        }
    }

    /// Drops this handle's clients and waits for every actor to exit.
    ///
    /// Actors stop once *all* clients are gone, so clones handed to resolvers must be
    /// dropped first or this waits forever.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down control plane...");
        drop(self.client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("Control plane shutdown complete.");
        Ok(())
    }
}
