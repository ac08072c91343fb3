//! Demo: target an organization against a seeded in-memory control plane, then change an
//! application's health check.

use platform_session::command::{SetHealthCheckCommand, TargetCommand, TargetRequest};
use platform_session::config::ClientConfig;
use platform_session::framework::Warnings;
use platform_session::lifecycle::{setup_tracing, ControlPlane, ControlPlaneSeed};
use platform_session::model::{Application, HealthCheckType, Organization, Route, Space};
use platform_session::mutation_actor::MutationActor;
use platform_session::resolution_actor::ResolutionActor;
use platform_session::session::{SessionState, SessionStore};
use std::path::Path;
use tracing::{error, info, Instrument};

fn seed() -> ControlPlaneSeed {
    ControlPlaneSeed {
        organizations: vec![Organization::new("org-1-guid", "acme")],
        spaces: vec![Space::new("space-1-guid", "dev", "org-1-guid", true)],
        applications: vec![Application::new("app-1-guid", "my-app", "space-1-guid")
            .with_detected_buildpack("go_buildpack")
            .with_routes(["route-1-guid"])],
        routes: vec![Route::new("route-1-guid", "my-app", "space-1-guid")],
        warnings: Warnings::from(vec!["API version 3.99.0 is behind the recommended version"]),
    }
}

fn print_warnings(warnings: &Warnings) {
    for warning in warnings {
        eprintln!("{warning}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::load(Some(Path::new("platform-session.toml")))?;
    setup_tracing(&config.log_filter);

    info!(binary_name = %config.binary_name, "Starting");

    let store = SessionStore::new(&config.session_path);
    let mut session = store.load()?;
    info!(path = %store.path().display(), "Session loaded");
    if session.api.is_none() {
        session = SessionState::new()
            .with_api("https://api.example.com", "3.99.0")
            .with_user("admin");
    }

    let control_plane = ControlPlane::start(seed());
    let resolver = ResolutionActor::new(control_plane.client.clone());

    let target = TargetCommand::new(resolver.clone(), config.binary_name.clone());
    let span = tracing::info_span!("target");
    let outcome = target
        .execute(&mut session, TargetRequest::new(Some("acme".into()), None))
        .instrument(span)
        .await;
    print_warnings(outcome.warnings());
    match outcome.into_result() {
        Ok(report) => {
            println!("{}", report.summary);
            if let Some(advisory) = report.advisory {
                println!("\n{advisory}");
            }
        }
        Err(e) => error!(error = %e, "Target failed"),
    }

    let set_health_check =
        SetHealthCheckCommand::new(MutationActor::new(resolver), config.binary_name.clone());
    let span = tracing::info_span!("set_health_check");
    let outcome = set_health_check
        .execute(&session, "my-app", HealthCheckType::Http)
        .instrument(span)
        .await;
    print_warnings(outcome.warnings());
    match outcome.into_result() {
        Ok(update) => println!("\n{update}\nOK"),
        Err(e) => error!(error = %e, "Set health check failed"),
    }

    store.save(&session)?;

    drop(target);
    drop(set_health_check);
    control_plane.shutdown().await?;

    info!("Done");
    Ok(())
}
