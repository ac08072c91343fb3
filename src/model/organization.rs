use crate::framework::{FrameworkError, Query, QueryFilter, RemoteResource, ResourceKind};

/// A tenant of the platform. Organization names are unique platform-wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub guid: String,
    pub name: String,
}

impl Organization {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }
}

/// Attribute changes for an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationUpdate {
    pub name: Option<String>,
}

impl OrganizationUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl RemoteResource for Organization {
    const KIND: ResourceKind = ResourceKind::Organization;
    type Update = OrganizationUpdate;

    fn guid(&self) -> &str {
        &self.guid
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &Query) -> bool {
        match query.filter {
            QueryFilter::Name => query.accepts(&self.name),
            _ => false,
        }
    }

    fn apply_update(&mut self, update: OrganizationUpdate) -> Result<(), FrameworkError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }
}
