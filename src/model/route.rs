use crate::framework::{FrameworkError, Query, QueryFilter, RemoteResource, ResourceKind};

/// A route mapping a hostname to applications in a space. Its display name is the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub guid: String,
    pub host: String,
    pub space_guid: String,
}

impl Route {
    pub fn new(
        guid: impl Into<String>,
        host: impl Into<String>,
        space_guid: impl Into<String>,
    ) -> Self {
        Self {
            guid: guid.into(),
            host: host.into(),
            space_guid: space_guid.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteUpdate {
    pub host: Option<String>,
}

impl RemoteResource for Route {
    const KIND: ResourceKind = ResourceKind::Route;
    type Update = RouteUpdate;

    fn guid(&self) -> &str {
        &self.guid
    }

    fn name(&self) -> &str {
        &self.host
    }

    fn matches(&self, query: &Query) -> bool {
        match query.filter {
            QueryFilter::Name => query.accepts(&self.host),
            QueryFilter::SpaceGuid => query.accepts(&self.space_guid),
            _ => false,
        }
    }

    fn apply_update(&mut self, update: RouteUpdate) -> Result<(), FrameworkError> {
        if let Some(host) = update.host {
            self.host = host;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_is_the_lookup_name() {
        let mut route = Route::new("route-guid", "my-app", "space-guid");
        assert_eq!(route.name(), "my-app");
        assert!(route.matches(&Query::name("my-app")));

        route
            .apply_update(RouteUpdate {
                host: Some("my-app-v2".into()),
            })
            .unwrap();

        assert_eq!(route.name(), "my-app-v2");
        assert!(!route.matches(&Query::name("my-app")));
        assert!(route.matches(&Query::space_guid("space-guid")));
    }
}
