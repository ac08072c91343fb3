//! # `set-health-check`
//!
//! Changes how the platform checks an application's health, in the targeted space.

use crate::command::{check_target, CommandError};
use crate::framework::{Outcome, Warnings};
use crate::model::{Application, HealthCheckType};
use crate::mutation_actor::{Change, MutationActor};
use crate::resolution_actor::ActionError;
use crate::session::SessionConfig;
use async_trait::async_trait;
use std::fmt::{self, Display};
use tracing::instrument;

#[async_trait]
pub trait SetHealthCheckActor: Send + Sync {
    async fn set_application_health_check_type_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
        health_check_type: HealthCheckType,
    ) -> Outcome<Change<Application>, ActionError>;
}

#[async_trait]
impl SetHealthCheckActor for MutationActor {
    async fn set_application_health_check_type_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
        health_check_type: HealthCheckType,
    ) -> Outcome<Change<Application>, ActionError> {
        MutationActor::set_application_health_check_type_by_name_and_space(
            self,
            name,
            space_guid,
            health_check_type,
        )
        .await
    }
}

/// What `set-health-check` did. Displays as the progress notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckUpdate {
    pub application: String,
    pub health_check_type: HealthCheckType,
    pub organization: String,
    pub space: String,
    pub user: String,
    pub change: Change<Application>,
}

impl Display for HealthCheckUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Updating health check type to '{}' for app {} in org {} / space {} as {}...",
            self.health_check_type, self.application, self.organization, self.space, self.user
        )
    }
}

pub struct SetHealthCheckCommand<A: SetHealthCheckActor> {
    actor: A,
    binary_name: String,
}

impl<A: SetHealthCheckActor> SetHealthCheckCommand<A> {
    pub fn new(actor: A, binary_name: impl Into<String>) -> Self {
        Self {
            actor,
            binary_name: binary_name.into(),
        }
    }

    #[instrument(skip(self, session))]
    pub async fn execute<S: SessionConfig + Sync>(
        &self,
        session: &S,
        application: &str,
        health_check_type: HealthCheckType,
    ) -> Outcome<HealthCheckUpdate, CommandError> {
        if let Err(e) = check_target(session, &self.binary_name, true, true) {
            return Outcome::err(e, Warnings::new());
        }
        let (Some(organization), Some(space)) =
            (session.current_organization(), session.current_space())
        else {
            return Outcome::err(
                CommandError::NoSpaceTargeted {
                    binary_name: self.binary_name.clone(),
                },
                Warnings::new(),
            );
        };

        self.actor
            .set_application_health_check_type_by_name_and_space(
                application,
                &space.guid,
                health_check_type,
            )
            .await
            .map_err(CommandError::from)
            .map(|change| HealthCheckUpdate {
                application: application.to_string(),
                health_check_type,
                organization: organization.name.clone(),
                space: space.name.clone(),
                user: session.current_user().unwrap_or_default().to_string(),
                change,
            })
    }
}
