use crate::session::{ApiTarget, SessionConfig, TargetedOrganization, TargetedSpace};
use serde::{Deserialize, Serialize};

/// In-memory session, serialized as-is by the [`SessionStore`](crate::session::SessionStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<TargetedOrganization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<TargetedSpace>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api(mut self, endpoint: impl Into<String>, version: impl Into<String>) -> Self {
        self.api = Some(ApiTarget {
            endpoint: endpoint.into(),
            version: version.into(),
        });
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

impl SessionConfig for SessionState {
    fn api_target(&self) -> Option<&ApiTarget> {
        self.api.as_ref()
    }

    fn current_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    fn current_organization(&self) -> Option<&TargetedOrganization> {
        self.organization.as_ref()
    }

    fn current_space(&self) -> Option<&TargetedSpace> {
        self.space.as_ref()
    }

    fn set_organization(&mut self, guid: &str, name: &str) {
        self.organization = Some(TargetedOrganization {
            guid: guid.to_string(),
            name: name.to_string(),
        });
        self.space = None;
    }

    fn clear_space(&mut self) {
        self.space = None;
    }

    fn set_space(&mut self, guid: &str, name: &str, allow_ssh: bool) {
        self.space = Some(TargetedSpace {
            guid: guid.to_string(),
            name: name.to_string(),
            allow_ssh,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_organization_clears_space() {
        let mut state = SessionState::new();
        state.set_organization("org-1", "acme");
        state.set_space("space-1", "dev", true);
        assert!(state.has_space());

        state.set_organization("org-2", "globex");

        assert_eq!(state.current_organization().map(|o| o.name.as_str()), Some("globex"));
        assert!(!state.has_space());
    }

    #[test]
    fn test_clear_space_keeps_organization() {
        let mut state = SessionState::new();
        state.set_organization("org-1", "acme");
        state.set_space("space-1", "dev", false);

        state.clear_space();

        assert!(state.has_organization());
        assert!(!state.has_space());
    }
}
