//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber::fmt` subscriber that hides the
//! module prefix (`with_target(false)`). Resource kinds, names and GUIDs are recorded as
//! structured fields instead.
//!
//! Logs go to stderr so the summary printed on stdout stays clean.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Default filter comes from the client configuration
//! cargo run
//!
//! # Show every query and update sent to the control plane
//! RUST_LOG=debug cargo run
//!
//! # Only the resolution layer
//! RUST_LOG=platform_session::resolution_actor=debug cargo run
//! ```
//!
//! **With `RUST_LOG=debug`** a `target -o acme` reads roughly:
//!
//! ```text
//! DEBUG execute:get_organization_by_name:query: Sending request name="acme" kind=Organization
//! DEBUG Query kind=Organization filters=[Query { filter: Name, .. }] count=1
//! DEBUG execute:get_organization_by_name: Resolved kind=Organization name="acme" count=1
//! INFO execute: Targeted organization organization=acme
//! INFO execute: Auto-targeted only space space=dev
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over `default_filter` when set.
///
/// Calling it a second time keeps the first subscriber.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // Kinds and names are fields, module paths add noise
        .compact()
        .try_init();
    if let Err(e) = installed {
        tracing::debug!(error = %e, "Tracing already initialized");
    }
}
