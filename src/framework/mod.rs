//! Generic remote-resource framework.
//!
//! This module provides the building blocks shared by every resource kind: the request
//! contract, the typed client, the outcome/warnings pair, and the in-memory server and
//! mock used to stand in for the control plane.
//!
//! # Main Components
//!
//! - [`RemoteResource`] - Trait that resource types implement to be served and queried
//! - [`ResourceClient`] - Typed client for one resource collection
//! - [`ResourceActor`] - In-memory collection server
//! - [`Outcome`] / [`Warnings`] - Result plus ordered diagnostics
//! - [`FrameworkError`] - Transport-level errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test callers without a server.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod outcome;
pub mod query;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::{RemoteResource, ResourceKind};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use outcome::{Outcome, Warnings};
pub use query::{Query, QueryFilter, QueryOperator};
