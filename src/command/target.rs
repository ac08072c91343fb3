//! # `target`
//!
//! Points the session at an organization and/or space.
//!
//! | Request                  | Remote calls                           | Commit                        |
//! |--------------------------|----------------------------------------|-------------------------------|
//! | organization and space   | organization, then space               | both, only if both resolve    |
//! | organization only        | organization, then its spaces          | organization, then sole space |
//! | space only               | space in the targeted organization     | space                         |
//! | neither                  | none                                   | nothing                       |
//!
//! The first failing call ends the command. Warnings from every call made so far are
//! returned with the error.

use crate::command::{check_target, CommandError};
use crate::framework::{Outcome, Warnings};
use crate::model::{Organization, Space};
use crate::resolution_actor::{ActionError, ResolutionActor};
use crate::session::SessionConfig;
use async_trait::async_trait;
use std::fmt::{self, Display};
use tracing::{debug, info, instrument};

/// The lookups `target` needs.
#[async_trait]
pub trait TargetActor: Send + Sync {
    async fn get_organization_by_name(&self, name: &str) -> Outcome<Organization, ActionError>;

    async fn get_organization_spaces(
        &self,
        organization_guid: &str,
    ) -> Outcome<Vec<Space>, ActionError>;

    async fn get_space_by_organization_and_name(
        &self,
        organization_guid: &str,
        name: &str,
    ) -> Outcome<Space, ActionError>;
}

#[async_trait]
impl TargetActor for ResolutionActor {
    async fn get_organization_by_name(&self, name: &str) -> Outcome<Organization, ActionError> {
        ResolutionActor::get_organization_by_name(self, name).await
    }

    async fn get_organization_spaces(
        &self,
        organization_guid: &str,
    ) -> Outcome<Vec<Space>, ActionError> {
        ResolutionActor::get_organization_spaces(self, organization_guid).await
    }

    async fn get_space_by_organization_and_name(
        &self,
        organization_guid: &str,
        name: &str,
    ) -> Outcome<Space, ActionError> {
        ResolutionActor::get_space_by_organization_and_name(self, organization_guid, name).await
    }
}

/// Which of the optional `-o` / `-s` inputs were given. Empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetRequest {
    OrganizationAndSpace { organization: String, space: String },
    Organization { organization: String },
    Space { space: String },
    Current,
}

impl TargetRequest {
    pub fn new(organization: Option<String>, space: Option<String>) -> Self {
        let organization = organization.filter(|o| !o.is_empty());
        let space = space.filter(|s| !s.is_empty());
        match (organization, space) {
            (Some(organization), Some(space)) => {
                TargetRequest::OrganizationAndSpace {
                    organization,
                    space,
                }
            }
            (Some(organization), None) => TargetRequest::Organization { organization },
            (None, Some(space)) => TargetRequest::Space { space },
            (None, None) => TargetRequest::Current,
        }
    }
}

/// The session as it stands after a successful `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSummary {
    pub api_endpoint: String,
    pub api_version: String,
    pub user: String,
    pub organization: Option<String>,
    pub space: Option<String>,
}

impl TargetSummary {
    pub fn from_session<S: SessionConfig + ?Sized>(session: &S) -> Self {
        let api = session.api_target();
        Self {
            api_endpoint: api.map(|a| a.endpoint.clone()).unwrap_or_default(),
            api_version: api.map(|a| a.version.clone()).unwrap_or_default(),
            user: session.current_user().unwrap_or_default().to_string(),
            organization: session.current_organization().map(|o| o.name.clone()),
            space: session.current_space().map(|s| s.name.clone()),
        }
    }
}

impl Display for TargetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<16}{}", "API endpoint:", self.api_endpoint)?;
        writeln!(f, "{:<16}{}", "API version:", self.api_version)?;
        write!(f, "{:<16}{}", "User:", self.user)?;
        if let Some(organization) = &self.organization {
            write!(f, "\n{:<16}{}", "Org:", organization)?;
        }
        if let Some(space) = &self.space {
            write!(f, "\n{:<16}{}", "Space:", space)?;
        }
        Ok(())
    }
}

/// A hint shown after the summary when the session is only partly targeted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    NoOrganizationTargeted { binary_name: String },
    NoSpaceTargeted { binary_name: String },
}

impl Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NoOrganizationTargeted { binary_name } => write!(
                f,
                "No org or space targeted, use '{binary_name} target -o ORG -s SPACE'"
            ),
            Advisory::NoSpaceTargeted { binary_name } => {
                write!(f, "No space targeted, use '{binary_name} target -s SPACE'")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub summary: TargetSummary,
    pub advisory: Option<Advisory>,
}

pub struct TargetCommand<A: TargetActor> {
    actor: A,
    binary_name: String,
}

impl<A: TargetActor> TargetCommand<A> {
    pub fn new(actor: A, binary_name: impl Into<String>) -> Self {
        Self {
            actor,
            binary_name: binary_name.into(),
        }
    }

    #[instrument(skip(self, session))]
    pub async fn execute<S: SessionConfig + Send>(
        &self,
        session: &mut S,
        request: TargetRequest,
    ) -> Outcome<TargetReport, CommandError> {
        let mut warnings = Warnings::new();
        let result = self.run(session, request, &mut warnings).await;
        if let Err(e) = &result {
            info!(error = %e, warnings = warnings.len(), "Target failed");
        }
        Outcome::new(result, warnings)
    }

    async fn run<S: SessionConfig + Send>(
        &self,
        session: &mut S,
        request: TargetRequest,
        warnings: &mut Warnings,
    ) -> Result<TargetReport, CommandError> {
        check_target(&*session, &self.binary_name, false, false)?;

        match request {
            TargetRequest::OrganizationAndSpace {
                organization,
                space,
            } => {
                self.target_organization_and_space(session, &organization, &space, warnings)
                    .await?
            }
            TargetRequest::Organization { organization } => {
                let organization = self.target_organization(session, &organization, warnings).await?;
                self.auto_target_space(session, &organization.guid, warnings)
                    .await?
            }
            TargetRequest::Space { space } => self.target_space(session, &space, warnings).await?,
            TargetRequest::Current => debug!("Reporting current target"),
        }

        Ok(self.report(&*session))
    }

    /// Commits nothing unless both lookups succeed.
    async fn target_organization_and_space<S: SessionConfig + Send>(
        &self,
        session: &mut S,
        organization_name: &str,
        space_name: &str,
        warnings: &mut Warnings,
    ) -> Result<(), CommandError> {
        let organization =
            warnings.absorb(self.actor.get_organization_by_name(organization_name).await)?;
        let space = warnings.absorb(
            self.actor
                .get_space_by_organization_and_name(&organization.guid, space_name)
                .await,
        )?;

        session.set_organization(&organization.guid, &organization.name);
        session.set_space(&space.guid, &space.name, space.allow_ssh);
        info!(organization = %organization.name, space = %space.name, "Targeted");
        Ok(())
    }

    async fn target_organization<S: SessionConfig + Send>(
        &self,
        session: &mut S,
        organization_name: &str,
        warnings: &mut Warnings,
    ) -> Result<Organization, CommandError> {
        let organization =
            warnings.absorb(self.actor.get_organization_by_name(organization_name).await)?;

        session.set_organization(&organization.guid, &organization.name);
        session.clear_space();
        info!(organization = %organization.name, "Targeted organization");
        Ok(organization)
    }

    /// Targets the organization's only space. Zero or several spaces leave the space
    /// untargeted. A failed listing keeps the organization already committed.
    async fn auto_target_space<S: SessionConfig + Send>(
        &self,
        session: &mut S,
        organization_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<(), CommandError> {
        let mut spaces =
            warnings.absorb(self.actor.get_organization_spaces(organization_guid).await)?;

        match (spaces.pop(), spaces.is_empty()) {
            (Some(space), true) => {
                session.set_space(&space.guid, &space.name, space.allow_ssh);
                info!(space = %space.name, "Auto-targeted only space");
            }
            (None, _) => debug!("Organization has no spaces"),
            (Some(_), false) => debug!(count = spaces.len() + 1, "Several spaces, none targeted"),
        }
        Ok(())
    }

    async fn target_space<S: SessionConfig + Send>(
        &self,
        session: &mut S,
        space_name: &str,
        warnings: &mut Warnings,
    ) -> Result<(), CommandError> {
        let Some(organization) = session.current_organization() else {
            return Err(CommandError::NoOrganizationTargeted {
                binary_name: self.binary_name.clone(),
            });
        };
        let organization_guid = organization.guid.clone();

        let space = warnings.absorb(
            self.actor
                .get_space_by_organization_and_name(&organization_guid, space_name)
                .await,
        )?;

        session.set_space(&space.guid, &space.name, space.allow_ssh);
        info!(space = %space.name, "Targeted space");
        Ok(())
    }

    fn report<S: SessionConfig>(&self, session: &S) -> TargetReport {
        let binary_name = self.binary_name.clone();
        let advisory = if !session.has_organization() {
            Some(Advisory::NoOrganizationTargeted { binary_name })
        } else if !session.has_space() {
            Some(Advisory::NoSpaceTargeted { binary_name })
        } else {
            None
        };
        TargetReport {
            summary: TargetSummary::from_session(session),
            advisory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_decision_table() {
        let some = |s: &str| Some(s.to_string());
        assert_eq!(
            TargetRequest::new(some("acme"), some("dev")),
            TargetRequest::OrganizationAndSpace {
                organization: "acme".into(),
                space: "dev".into()
            }
        );
        assert_eq!(
            TargetRequest::new(some("acme"), some("")),
            TargetRequest::Organization {
                organization: "acme".into()
            }
        );
        assert_eq!(
            TargetRequest::new(None, some("dev")),
            TargetRequest::Space { space: "dev".into() }
        );
        assert_eq!(TargetRequest::new(some(""), None), TargetRequest::Current);
    }

    #[test]
    fn test_summary_lists_targeted_names() {
        let summary = TargetSummary {
            api_endpoint: "https://api.example.com".into(),
            api_version: "3.99.0".into(),
            user: "alice".into(),
            organization: Some("acme".into()),
            space: None,
        };
        assert_eq!(
            summary.to_string(),
            "API endpoint:   https://api.example.com\n\
             API version:    3.99.0\n\
             User:           alice\n\
             Org:            acme"
        );
    }

    #[test]
    fn test_advisory_text() {
        let advisory = Advisory::NoOrganizationTargeted {
            binary_name: "cf".into(),
        };
        assert_eq!(
            advisory.to_string(),
            "No org or space targeted, use 'cf target -o ORG -s SPACE'"
        );
        let advisory = Advisory::NoSpaceTargeted {
            binary_name: "cf".into(),
        };
        assert_eq!(advisory.to_string(), "No space targeted, use 'cf target -s SPACE'");
    }
}
