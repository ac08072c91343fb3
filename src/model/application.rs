use crate::framework::{FrameworkError, Query, QueryFilter, RemoteResource, ResourceKind};
use std::fmt::{self, Display};
use std::str::FromStr;

/// How the platform decides whether an application instance is healthy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HealthCheckType {
    #[default]
    Port,
    Process,
    Http,
}

impl HealthCheckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCheckType::Port => "port",
            HealthCheckType::Process => "process",
            HealthCheckType::Http => "http",
        }
    }
}

impl Display for HealthCheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid health check type '{0}': expected one of port, process, http")]
pub struct ParseHealthCheckTypeError(pub String);

impl FromStr for HealthCheckType {
    type Err = ParseHealthCheckTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "port" => Ok(HealthCheckType::Port),
            "process" => Ok(HealthCheckType::Process),
            "http" => Ok(HealthCheckType::Http),
            other => Err(ParseHealthCheckTypeError(other.to_string())),
        }
    }
}

/// An application deployed to a space.
///
/// `buildpack` is what the user asked for; `detected_buildpack` is what staging picked
/// when nothing was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub guid: String,
    pub name: String,
    pub space_guid: String,
    pub health_check_type: HealthCheckType,
    pub buildpack: Option<String>,
    pub detected_buildpack: Option<String>,
    /// Routes this application is bound to.
    pub route_guids: Vec<String>,
}

impl Application {
    pub fn new(
        guid: impl Into<String>,
        name: impl Into<String>,
        space_guid: impl Into<String>,
    ) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            space_guid: space_guid.into(),
            health_check_type: HealthCheckType::default(),
            buildpack: None,
            detected_buildpack: None,
            route_guids: Vec::new(),
        }
    }

    pub fn with_health_check_type(mut self, health_check_type: HealthCheckType) -> Self {
        self.health_check_type = health_check_type;
        self
    }

    pub fn with_buildpack(mut self, buildpack: impl Into<String>) -> Self {
        self.buildpack = Some(buildpack.into());
        self
    }

    pub fn with_detected_buildpack(mut self, buildpack: impl Into<String>) -> Self {
        self.detected_buildpack = Some(buildpack.into());
        self
    }

    pub fn with_routes<S: Into<String>>(mut self, route_guids: impl IntoIterator<Item = S>) -> Self {
        self.route_guids = route_guids.into_iter().map(Into::into).collect();
        self
    }

    /// The buildpack staging will use: the explicit one if set, otherwise the detected one.
    pub fn calculated_buildpack(&self) -> Option<&str> {
        self.buildpack
            .as_deref()
            .filter(|b| !b.is_empty())
            .or(self.detected_buildpack.as_deref())
    }
}

/// Attribute changes for an application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationUpdate {
    pub health_check_type: Option<HealthCheckType>,
    pub buildpack: Option<String>,
}

impl ApplicationUpdate {
    pub fn health_check_type(health_check_type: HealthCheckType) -> Self {
        Self {
            health_check_type: Some(health_check_type),
            ..Default::default()
        }
    }
}

impl RemoteResource for Application {
    const KIND: ResourceKind = ResourceKind::Application;
    type Update = ApplicationUpdate;

    fn guid(&self) -> &str {
        &self.guid
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &Query) -> bool {
        match query.filter {
            QueryFilter::Name => query.accepts(&self.name),
            QueryFilter::SpaceGuid => query.accepts(&self.space_guid),
            QueryFilter::RouteGuid => self.route_guids.iter().any(|guid| query.accepts(guid)),
            QueryFilter::OrganizationGuid => false,
        }
    }

    fn apply_update(&mut self, update: ApplicationUpdate) -> Result<(), FrameworkError> {
        if let Some(health_check_type) = update.health_check_type {
            self.health_check_type = health_check_type;
        }
        if let Some(buildpack) = update.buildpack {
            self.buildpack = Some(buildpack);
        }
        Ok(())
    }
}
