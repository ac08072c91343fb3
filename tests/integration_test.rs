use platform_session::command::{SetHealthCheckCommand, TargetCommand, TargetRequest};
use platform_session::framework::{Query, Warnings};
use platform_session::lifecycle::{ControlPlane, ControlPlaneSeed};
use platform_session::model::{Application, HealthCheckType, Organization, Route, Space};
use platform_session::mutation_actor::MutationActor;
use platform_session::resolution_actor::ResolutionActor;
use platform_session::session::{SessionConfig, SessionState, SessionStore};

fn seed(warnings: Vec<&str>) -> ControlPlaneSeed {
    ControlPlaneSeed {
        organizations: vec![
            Organization::new("org-1-guid", "acme"),
            Organization::new("org-2-guid", "globex"),
        ],
        spaces: vec![
            Space::new("space-1-guid", "dev", "org-1-guid", true),
            Space::new("space-2-guid", "dev", "org-2-guid", false),
            Space::new("space-3-guid", "prod", "org-2-guid", false),
        ],
        applications: vec![Application::new("app-1-guid", "my-app", "space-1-guid")
            .with_detected_buildpack("go_buildpack")
            .with_routes(["route-1-guid"])],
        routes: vec![Route::new("route-1-guid", "my-app", "space-1-guid")],
        warnings: Warnings::from(warnings),
    }
}

fn logged_in() -> SessionState {
    SessionState::new()
        .with_api("https://api.example.com", "3.99.0")
        .with_user("admin")
}

/// Full flow against the in-memory control plane: target, change a health check, persist.
#[tokio::test]
async fn test_full_session_flow() {
    let control_plane = ControlPlane::start(seed(vec!["warning-1"]));
    let resolver = ResolutionActor::new(control_plane.client.clone());
    let mut session = logged_in();

    // acme has a single space, so it is targeted automatically
    let target = TargetCommand::new(resolver.clone(), "cf");
    let outcome = target
        .execute(&mut session, TargetRequest::new(Some("acme".into()), None))
        .await;
    assert_eq!(outcome.warnings().as_slice(), ["warning-1", "warning-1"]);
    assert!(outcome.into_result().unwrap().advisory.is_none());
    assert_eq!(
        session.current_space().map(|s| s.guid.as_str()),
        Some("space-1-guid")
    );

    let set_health_check = SetHealthCheckCommand::new(MutationActor::new(resolver.clone()), "cf");
    let first = set_health_check
        .execute(&session, "my-app", HealthCheckType::Http)
        .await
        .into_result()
        .unwrap();
    assert!(first.change.was_updated());

    let second = set_health_check
        .execute(&session, "my-app", HealthCheckType::Http)
        .await
        .into_result()
        .unwrap();
    assert!(!second.change.was_updated());

    let app = resolver
        .get_application_by_name_and_space("my-app", "space-1-guid")
        .await
        .into_result()
        .unwrap();
    assert_eq!(app.health_check_type, HealthCheckType::Http);
    assert_eq!(app.calculated_buildpack(), Some("go_buildpack"));

    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("session.toml"));
    store.save(&session).unwrap();
    assert_eq!(store.load().unwrap(), session);

    drop(target);
    drop(set_health_check);
    drop(resolver);
    control_plane.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_space_names_are_scoped_by_organization() {
    let control_plane = ControlPlane::start(seed(vec![]));
    let resolver = ResolutionActor::new(control_plane.client.clone());
    let target = TargetCommand::new(resolver.clone(), "cf");
    let mut session = logged_in();

    let outcome = target
        .execute(
            &mut session,
            TargetRequest::new(Some("globex".into()), Some("dev".into())),
        )
        .await;
    assert!(outcome.is_ok());
    assert_eq!(
        session.current_space().map(|s| s.guid.as_str()),
        Some("space-2-guid")
    );

    // globex has two spaces: targeting the org alone leaves the space untargeted
    let outcome = target
        .execute(&mut session, TargetRequest::new(Some("globex".into()), None))
        .await;
    assert!(outcome.is_ok());
    assert!(!session.has_space());

    let missing = target
        .execute(&mut session, TargetRequest::new(None, Some("staging".into())))
        .await;
    assert_eq!(
        missing.into_result().unwrap_err().to_string(),
        "Space 'staging' not found."
    );

    drop(target);
    drop(resolver);
    control_plane.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_reads_and_ssh_toggle() {
    let control_plane = ControlPlane::start(seed(vec![]));
    let resolver = ResolutionActor::new(control_plane.client.clone());

    let routes = resolver
        .get_space_routes("space-1-guid")
        .await
        .into_result()
        .unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].host, "my-app");

    let apps = resolver
        .get_route_applications("route-1-guid", vec![Query::name("my-app")])
        .await
        .into_result()
        .unwrap();
    assert_eq!(apps.len(), 1);

    let mutation = MutationActor::new(resolver.clone());
    let change = mutation
        .set_space_ssh_allowed("org-2-guid", "prod", true)
        .await
        .into_result()
        .unwrap();
    assert!(change.was_updated());
    assert!(change.into_inner().allow_ssh);

    drop(mutation);
    drop(resolver);
    control_plane.shutdown().await.unwrap();
}
