//! Error types for the session commands.

use crate::resolution_actor::ActionError;
use thiserror::Error;

/// Errors a command can return. Precondition variants are raised before any request is sent.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommandError {
    #[error("No API endpoint set. Use '{binary_name} login' to set an endpoint.")]
    NoApiTargeted { binary_name: String },

    #[error("Not logged in. Use '{binary_name} login' to log in.")]
    NotLoggedIn { binary_name: String },

    #[error("No org targeted, use '{binary_name} target -o ORG' to target an org.")]
    NoOrganizationTargeted { binary_name: String },

    #[error("No space targeted, use '{binary_name} target -s SPACE' to target a space.")]
    NoSpaceTargeted { binary_name: String },

    /// A resolution or remote failure, displayed unchanged.
    #[error(transparent)]
    Action(#[from] ActionError),
}
