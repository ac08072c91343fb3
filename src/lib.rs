//! # Platform Session
//!
//! > **Session targeting for a multi-tenant platform control plane.**
//!
//! This crate resolves human-readable organization, space and application names into
//! stable GUIDs, records the targeted organization and space in a session, and applies
//! conditional changes to remote resources.
//!
//! ## 🚀 Core Concepts
//!
//! ### Outcomes, not just Results
//! Every remote call answers with a value or an error *and* a list of warnings. An
//! [`Outcome`](framework::Outcome) keeps both, and
//! [`Warnings::absorb`](framework::Warnings::absorb) chains calls with `?` while
//! collecting warnings in call order, even when a later call fails.
//!
//! ### One resolver for every kind
//! `resolve_unique<T: RemoteResource>` sends a single filtered query and checks the
//! cardinality itself: no match is `NotFound`, one match is the resource, more than one
//! is `MultipleFound`.
//!
//! ### Mocking
//! [`framework::mock::MockClient`] scripts responses per collection and records every
//! request, so tests can assert which filters were sent and that no write happened.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Request contract, typed [`ResourceClient`](framework::ResourceClient), the in-memory
//! [`ResourceActor`](framework::ResourceActor) and the mocks.
//!
//! ### 2. The Data ([`model`])
//! Organization, Space, Application and Route.
//!
//! ### 3. The Actors ([`resolution_actor`], [`mutation_actor`])
//! Name resolution and list reads; conditional updates that write at most once.
//!
//! ### 4. The Commands ([`command`])
//! `target` and `set-health-check`, driven through the [`session`] traits.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! Starts the in-memory control plane, installs tracing and loads configuration.
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod command;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod mutation_actor;
pub mod resolution_actor;
pub mod session;
