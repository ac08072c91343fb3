use crate::framework::{FrameworkError, Query, QueryFilter, RemoteResource, ResourceKind};

/// A space inside an organization.
///
/// Space names are only unique within their organization, so a space lookup is always
/// scoped by the parent organization GUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    pub guid: String,
    pub name: String,
    pub organization_guid: String,
    pub allow_ssh: bool,
}

impl Space {
    pub fn new(
        guid: impl Into<String>,
        name: impl Into<String>,
        organization_guid: impl Into<String>,
        allow_ssh: bool,
    ) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            organization_guid: organization_guid.into(),
            allow_ssh,
        }
    }
}

/// Attribute changes for a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceUpdate {
    pub name: Option<String>,
    pub allow_ssh: Option<bool>,
}

impl SpaceUpdate {
    pub fn allow_ssh(allowed: bool) -> Self {
        Self {
            allow_ssh: Some(allowed),
            ..Default::default()
        }
    }
}

impl RemoteResource for Space {
    const KIND: ResourceKind = ResourceKind::Space;
    type Update = SpaceUpdate;

    fn guid(&self) -> &str {
        &self.guid
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &Query) -> bool {
        match query.filter {
            QueryFilter::Name => query.accepts(&self.name),
            QueryFilter::OrganizationGuid => query.accepts(&self.organization_guid),
            _ => false,
        }
    }

    fn apply_update(&mut self, update: SpaceUpdate) -> Result<(), FrameworkError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(allow_ssh) = update.allow_ssh {
            self.allow_ssh = allow_ssh;
        }
        Ok(())
    }
}
