//! Session state: which API, user, organization and space the client is pointed at.
//!
//! Commands only see the [`SessionConfig`] trait, so tests can hand them a plain
//! [`SessionState`] while the binary loads and saves one through a [`SessionStore`].

pub mod state;
pub mod store;

pub use state::*;
pub use store::*;

use serde::{Deserialize, Serialize};

/// The control plane endpoint a session talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiTarget {
    pub endpoint: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetedOrganization {
    pub guid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetedSpace {
    pub guid: String,
    pub name: String,
    pub allow_ssh: bool,
}

/// Read and write access to the targeted organization and space.
///
/// A space is only meaningful inside an organization: [`SessionConfig::set_organization`]
/// must clear any targeted space.
pub trait SessionConfig {
    fn api_target(&self) -> Option<&ApiTarget>;

    fn current_user(&self) -> Option<&str>;

    fn current_organization(&self) -> Option<&TargetedOrganization>;

    fn current_space(&self) -> Option<&TargetedSpace>;

    /// Targets an organization and clears the targeted space.
    fn set_organization(&mut self, guid: &str, name: &str);

    fn clear_space(&mut self);

    fn set_space(&mut self, guid: &str, name: &str, allow_ssh: bool);

    fn has_organization(&self) -> bool {
        self.current_organization().is_some()
    }

    fn has_space(&self) -> bool {
        self.current_space().is_some()
    }
}
