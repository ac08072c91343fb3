//! Control-plane resources implementing the [`RemoteResource`](crate::framework::RemoteResource) trait.
//!
//! Values here are transient: they are built from each response and never cached.

pub mod application;
pub mod organization;
pub mod route;
pub mod space;

pub use application::*;
pub use organization::*;
pub use route::*;
pub use space::*;
