//! Rendering tests: registry coverage and identity-aware page content.

use anyhow::Result;
use healthid::app::config::HealthIdConfig;
use healthid::app::App;
use healthid::app::session::Role;
use healthid::auth::LoginRequest;
use healthid::views::pages::create_default_registry;

fn make_app() -> App {
    App::builder(HealthIdConfig::default())
        .build()
        .expect("app builds")
}

#[test]
fn test_default_registry_covers_every_route() {
    let app = make_app();
    let registry = create_default_registry();
    for route in app.router().routes() {
        assert!(
            registry.keys().any(|k| k == route.view),
            "no view registered for {}",
            route.pattern
        );
    }
}

#[test]
fn test_patient_dashboard_uses_fallback_without_session() -> Result<()> {
    let mut app = make_app();
    let outcome = app.goto("/patient-dashboard")?;
    let text = outcome.document.render_text();
    // The greeting uses the first name of the fallback profile.
    assert!(text.contains("Hello: Carlos"));
    assert!(text.contains("BR-12345678"));
    Ok(())
}

#[test]
fn test_patient_dashboard_shows_logged_in_identity() -> Result<()> {
    let mut app = make_app();
    let outcome =
        app.login(&LoginRequest::new(Role::Patient).with_name("Ana Costa").with_id("BR-77"))?;
    let text = outcome.document.render_text();
    assert!(text.contains("Hello: Ana"));
    assert!(text.contains("BR-77"));
    assert!(!text.contains("Carlos Henrique da Silva"));
    Ok(())
}

#[test]
fn test_doctor_dashboard_shows_registration_id() -> Result<()> {
    let mut app = make_app();
    let outcome = app.login(&LoginRequest::new(Role::Doctor).with_id("CRM-4521"))?;
    let text = outcome.document.render_text();
    assert!(text.contains("Dr. Maria Santos"));
    assert!(text.contains("CRM-4521"));
    Ok(())
}

#[test]
fn test_settings_reflects_toggle_state() -> Result<()> {
    let mut app = make_app();
    app.login(&LoginRequest::new(Role::Patient))?;
    app.goto("/settings")?;
    app.toggle_setting("appointment_alerts")?;

    let outcome = app.goto("/settings")?;
    let text = outcome.document.render_text();
    assert!(text.contains("Appointment Alerts: off"));
    assert!(text.contains("Health Reminders: on"));
    Ok(())
}

#[test]
fn test_consultation_view_renders_draft_fields() -> Result<()> {
    let mut app = make_app();
    app.goto("/doctor/consultation/BR-321")?;
    app.update_consultation("vital_signs.temperature", "37.2")?;
    app.update_consultation("diagnosis", "seasonal rhinitis")?;

    let outcome = app.goto("/doctor/consultation/BR-321")?;
    let text = outcome.document.render_text();
    assert!(text.contains("BR-321"));
    assert!(text.contains("37.2"));
    assert!(text.contains("seasonal rhinitis"));
    Ok(())
}

#[test]
fn test_documents_serialize_to_json() -> Result<()> {
    let mut app = make_app();
    let outcome = app.goto("/insurance")?;
    let json = serde_json::to_value(&outcome.document)?;
    assert_eq!(json["view"], "insurance");
    assert!(json["body"].as_array().is_some_and(|b| !b.is_empty()));
    Ok(())
}
