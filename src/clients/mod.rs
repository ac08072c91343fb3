//! Typed handles on the control plane's resource collections.

pub mod control_plane_client;
pub mod mock;

pub use control_plane_client::*;
