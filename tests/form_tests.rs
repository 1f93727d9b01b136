//! Draft state tests: dotted-path updates, attachments, settings toggles,
//! and the reset-on-navigation lifecycle.

use anyhow::Result;
use healthid::app::config::HealthIdConfig;
use healthid::app::event::AppEvent;
use healthid::app::router::ViewKey;
use healthid::app::App;
use healthid::forms::{Attachment, AttachmentKind, ConsultationType, FormError};

fn make_app() -> App {
    App::builder(HealthIdConfig::default())
        .build()
        .expect("app builds")
}

fn make_app_on_consultation() -> Result<App> {
    let mut app = make_app();
    app.goto("/doctor/consultation")?;
    Ok(app)
}

// ─── Consultation Draft ─────────────────────────────────────────

#[test]
fn test_vital_sign_update_preserves_siblings() -> Result<()> {
    let mut app = make_app_on_consultation()?;
    app.update_consultation("vital_signs.heart_rate", "72")?;
    app.update_consultation("vital_signs.blood_pressure", "120/80")?;

    let vitals = &app.drafts().consultation.vital_signs;
    assert_eq!(vitals.heart_rate, "72");
    assert_eq!(vitals.blood_pressure, "120/80");
    assert_eq!(vitals.temperature, "");
    assert_eq!(vitals.weight, "");
    assert_eq!(vitals.height, "");
    Ok(())
}

#[test]
fn test_top_level_field_update() -> Result<()> {
    let mut app = make_app_on_consultation()?;
    app.update_consultation("chief_complaint", "persistent headache")?;
    app.update_consultation("consultation_type", "follow-up")?;

    let draft = &app.drafts().consultation;
    assert_eq!(draft.chief_complaint, "persistent headache");
    assert_eq!(draft.consultation_type, ConsultationType::FollowUp);
    Ok(())
}

#[test]
fn test_unknown_field_is_rejected() -> Result<()> {
    let mut app = make_app_on_consultation()?;
    let err = app.update_consultation("vital_signs.pulse", "60").unwrap_err();
    assert!(matches!(err, FormError::UnknownField(_)));
    // Draft untouched.
    assert_eq!(app.drafts().consultation.vital_signs.heart_rate, "");
    Ok(())
}

#[test]
fn test_attachments_append_in_order() -> Result<()> {
    let mut app = make_app_on_consultation()?;
    app.attach([Attachment::new("xray.png", "image/png")]);
    app.attach([
        Attachment::new("labs.pdf", "application/pdf"),
        Attachment::new("scan.jpg", "image/jpeg"),
    ]);

    let attachments = &app.drafts().consultation.attachments;
    let names: Vec<&str> = attachments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["xray.png", "labs.pdf", "scan.jpg"]);
    assert_eq!(attachments[0].kind(), AttachmentKind::Image);
    assert_eq!(attachments[1].kind(), AttachmentKind::Document);
    assert_eq!(attachments[2].kind(), AttachmentKind::Image);
    Ok(())
}

#[test]
fn test_save_consultation_returns_to_doctor_dashboard() -> Result<()> {
    let mut app = make_app_on_consultation()?;
    app.update_consultation("diagnosis", "tension headache")?;
    let mut events = app.subscribe();

    let outcome = app.save_consultation()?;
    assert_eq!(outcome.view, ViewKey::DoctorDashboard);

    let mut saw_saved = false;
    let mut saw_toast = false;
    while let Ok(event) = events.try_recv() {
        match event {
            AppEvent::ConsultationSaved { .. } => saw_saved = true,
            AppEvent::Toast(toast) if toast.title == "Consultation Saved" => saw_toast = true,
            _ => {}
        }
    }
    assert!(saw_saved);
    assert!(saw_toast);
    Ok(())
}

// ─── Draft Lifecycle ────────────────────────────────────────────

#[test]
fn test_navigation_away_discards_drafts() -> Result<()> {
    let mut app = make_app_on_consultation()?;
    app.update_consultation("diagnosis", "unsaved work")?;
    app.goto("/doctor-dashboard")?;
    app.goto("/doctor/consultation")?;
    assert_eq!(app.drafts().consultation.diagnosis, "");
    Ok(())
}

#[test]
fn test_same_view_navigation_keeps_drafts() -> Result<()> {
    let mut app = make_app_on_consultation()?;
    app.update_consultation("diagnosis", "in progress")?;
    app.goto("/doctor/consultation")?;
    assert_eq!(app.drafts().consultation.diagnosis, "in progress");
    Ok(())
}

// ─── Settings Draft ─────────────────────────────────────────────

#[test]
fn test_toggle_flips_and_reports_new_value() -> Result<()> {
    let mut app = make_app();
    // marketing_communications starts off, health_reminders starts on.
    assert!(app.toggle_setting("marketing_communications")?);
    assert!(!app.toggle_setting("marketing_communications")?);
    assert!(!app.toggle_setting("health_reminders")?);
    Ok(())
}

#[test]
fn test_unknown_toggle_is_rejected() {
    let mut app = make_app();
    let err = app.toggle_setting("dark_mode").unwrap_err();
    assert!(matches!(err, FormError::UnknownToggle(_)));
}
