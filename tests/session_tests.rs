//! Session store and login/logout lifecycle tests.
//!
//! Covers the single-slot store contract, the post-login navigation, and
//! the biometric variant of the login flow.

use anyhow::Result;
use healthid::app::config::{HealthIdConfig, LoginSection};
use healthid::app::event::AppEvent;
use healthid::app::router::ViewKey;
use healthid::app::session::{Identity, Role, SessionStore};
use healthid::app::App;
use healthid::auth::LoginRequest;

// ─── Helpers ────────────────────────────────────────────────────

fn make_config() -> HealthIdConfig {
    HealthIdConfig {
        login: LoginSection {
            biometric_delay_ms: 5,
            ..LoginSection::default()
        },
        ..HealthIdConfig::default()
    }
}

fn make_app() -> App {
    App::builder(make_config()).build().expect("app builds")
}

fn sample_identity() -> Identity {
    Identity {
        id: "test-1".to_string(),
        display_name: "Ana Costa".to_string(),
        role: Role::Patient,
        health_id: Some("BR-99".to_string()),
        registration_id: None,
        avatar_ref: None,
    }
}

// ─── Session Store ──────────────────────────────────────────────

#[test]
fn test_store_set_then_get_returns_exact_identity() {
    let store = SessionStore::new();
    let identity = sample_identity();
    store.set(Some(identity.clone()));
    assert_eq!(store.get(), Some(identity.clone()));
    // Unchanged until the next set.
    assert_eq!(store.get(), Some(identity));
}

#[test]
fn test_store_last_write_wins() {
    let store = SessionStore::new();
    store.set(Some(sample_identity()));
    let replacement = Identity {
        display_name: "Pedro Lima".to_string(),
        ..sample_identity()
    };
    store.set(Some(replacement.clone()));
    assert_eq!(store.get(), Some(replacement));
}

// ─── Login ──────────────────────────────────────────────────────

#[test]
fn test_login_installs_identity_and_navigates_home() -> Result<()> {
    let mut app = make_app();
    let outcome = app.login(&LoginRequest::new(Role::Patient).with_id("BR-12345678"))?;

    assert_eq!(outcome.view, ViewKey::PatientDashboard);
    assert_eq!(outcome.path, "/patient-dashboard");
    let identity = app.session().get().expect("identity installed");
    assert_eq!(identity.role, Role::Patient);
    assert_eq!(identity.health_id.as_deref(), Some("BR-12345678"));
    Ok(())
}

#[test]
fn test_doctor_login_routes_to_doctor_home() -> Result<()> {
    let mut app = make_app();
    let outcome = app.login(&LoginRequest::new(Role::Doctor))?;
    assert_eq!(outcome.view, ViewKey::DoctorDashboard);
    Ok(())
}

#[test]
fn test_login_emits_success_toast() -> Result<()> {
    let mut app = make_app();
    let mut events = app.subscribe();
    app.login(&LoginRequest::new(Role::Patient).with_name("Ana Costa"))?;

    let mut saw_login = false;
    let mut saw_toast = false;
    while let Ok(event) = events.try_recv() {
        match event {
            AppEvent::LoginSucceeded { identity } => {
                assert_eq!(identity.display_name, "Ana Costa");
                saw_login = true;
            }
            AppEvent::Toast(toast) if toast.title == "Login Successful" => {
                assert_eq!(toast.description, "Welcome, Ana Costa!");
                saw_toast = true;
            }
            _ => {}
        }
    }
    assert!(saw_login);
    assert!(saw_toast);
    Ok(())
}

// ─── Logout ─────────────────────────────────────────────────────

#[test]
fn test_logout_clears_session_and_navigates_to_root() -> Result<()> {
    let mut app = make_app();
    app.login(&LoginRequest::new(Role::Doctor))?;
    assert!(app.session().is_authenticated());

    let outcome = app.logout()?;
    assert_eq!(outcome.path, "/");
    assert_eq!(outcome.view, ViewKey::Index);
    assert!(app.session().get().is_none());
    Ok(())
}

#[test]
fn test_logout_is_always_valid() -> Result<()> {
    let mut app = make_app();
    // Logging out without a session is still the logout operation.
    let outcome = app.logout()?;
    assert_eq!(outcome.view, ViewKey::Index);
    assert!(!app.session().is_authenticated());
    Ok(())
}

// ─── Biometric Login ────────────────────────────────────────────

#[tokio::test]
async fn test_biometric_login_resolves_identical_contract() -> Result<()> {
    let mut app = make_app();
    let mut events = app.subscribe();

    let request = LoginRequest::new(Role::Patient).with_name("Ana Costa").with_id("BR-7");
    let outcome = app.biometric_login(&request).await?;

    assert_eq!(outcome.view, ViewKey::PatientDashboard);
    let identity = app.session().get().expect("identity installed");
    assert_eq!(identity.display_name, "Ana Costa");
    assert_eq!(identity.health_id.as_deref(), Some("BR-7"));

    // The biometric prompt precedes the login result.
    let mut order = Vec::new();
    while let Ok(event) = events.try_recv() {
        order.push(event.event_type());
    }
    let prompt = order.iter().position(|t| *t == "biometric_requested");
    let login = order.iter().position(|t| *t == "login_succeeded");
    assert!(prompt.expect("prompt emitted") < login.expect("login emitted"));
    Ok(())
}
