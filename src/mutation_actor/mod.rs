//! Conditional writes against the control plane.
//!
//! Every operation resolves its target by name through the
//! [`ResolutionActor`](crate::resolution_actor::ResolutionActor) and sends at most one
//! update, and only when the observed value differs from the desired one. Warnings from the
//! resolution come first, followed by those of the update.

mod actions;

pub use actions::*;

use crate::framework::{Outcome, RemoteResource, ResourceClient, Warnings};
use crate::model::{Application, HealthCheckType, Space};
use crate::resolution_actor::{ActionError, ResolutionActor};
use tracing::{debug, info, instrument};

/// Write-side actor. Shares the resolver's client for its updates.
#[derive(Clone)]
pub struct MutationActor {
    resolver: ResolutionActor,
}

impl MutationActor {
    pub fn new(resolver: ResolutionActor) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ResolutionActor {
        &self.resolver
    }

    #[instrument(skip(self))]
    pub async fn set_application_health_check_type_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
        health_check_type: HealthCheckType,
    ) -> Outcome<Change<Application>, ActionError> {
        let resolved = self
            .resolver
            .get_application_by_name_and_space(name, space_guid)
            .await;
        update_if_changed(
            &self.resolver.client().applications,
            resolved,
            SetHealthCheckType(health_check_type),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn set_space_ssh_allowed(
        &self,
        organization_guid: &str,
        space_name: &str,
        allowed: bool,
    ) -> Outcome<Change<Space>, ActionError> {
        let resolved = self
            .resolver
            .get_space_by_organization_and_name(organization_guid, space_name)
            .await;
        update_if_changed(&self.resolver.client().spaces, resolved, SetAllowSsh(allowed)).await
    }
}

async fn update_if_changed<M: Mutation>(
    client: &ResourceClient<M::Resource>,
    resolved: Outcome<M::Resource, ActionError>,
    mutation: M,
) -> Outcome<Change<M::Resource>, ActionError> {
    let mut warnings = Warnings::new();
    let resource = match warnings.absorb(resolved) {
        Ok(resource) => resource,
        Err(e) => return Outcome::err(e, warnings),
    };

    let kind = <M::Resource as RemoteResource>::KIND;
    if mutation.is_satisfied_by(&resource) {
        debug!(%kind, name = %resource.name(), "Already up to date");
        return Outcome::ok(Change::Unchanged(resource), warnings);
    }

    let guid = resource.guid().to_string();
    info!(%kind, %guid, name = %resource.name(), ?mutation, "Updating");
    let result = warnings
        .absorb(client.update(guid, mutation.into_update()).await)
        .map(Change::Updated)
        .map_err(ActionError::from);
    Outcome::new(result, warnings)
}
