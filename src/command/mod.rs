//! Session commands built on the resolution and mutation actors.
//!
//! Each command checks its preconditions, runs its remote calls in order and returns an
//! [`Outcome`](crate::framework::Outcome): a report or a [`CommandError`], together with
//! every warning gathered along the way. Rendering is left to the caller.

pub mod error;
pub mod set_health_check;
pub mod shared;
pub mod target;

pub use error::*;
pub use set_health_check::*;
pub use shared::check_target;
pub use target::*;
