//! Runtime wiring: the in-memory control plane and the tracing subscriber.
//!
//! - [`ControlPlane`] spawns one [`ResourceActor`](crate::framework::ResourceActor) per
//!   resource kind and hands out a [`ControlPlaneClient`](crate::clients::ControlPlaneClient).
//! - [`setup_tracing`] installs the process-wide subscriber.

pub mod control_plane;
pub mod tracing;

pub use control_plane::*;
pub use self::tracing::*;
