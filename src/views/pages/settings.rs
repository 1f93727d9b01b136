use crate::app::router::ViewKey;
use crate::app::session::Role;
use crate::views::{Document, Node, RenderContext, View, ViewError};

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Settings: profile, language, notification and privacy toggles, data
/// rights, and sign-out.
///
/// The only guarded view; the router redirects to `/login` when no session
/// is active, so the identity is expected here.
pub struct SettingsView;

impl View for SettingsView {
    fn key(&self) -> ViewKey {
        ViewKey::Settings
    }

    fn title(&self) -> &str {
        "Settings"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Document, ViewError> {
        let identity = ctx.identity.ok_or(ViewError::SessionRequired(self.key()))?;
        let draft = &ctx.drafts.settings;

        let role_line = match identity.role {
            Role::Patient => format!(
                "Health ID: {}",
                identity.health_id.as_deref().unwrap_or_default()
            ),
            Role::Doctor => format!(
                "Registration: {}",
                identity.registration_id.as_deref().unwrap_or_default()
            ),
        };

        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::text("Privacy, preferences & account management"));
        doc.push(Node::section(
            "Profile Information",
            vec![
                Node::field("Name", identity.display_name.clone()),
                Node::text(role_line),
            ],
        ));
        doc.push(Node::section(
            "Language & Region",
            vec![Node::field("Preferred Language", draft.language.label())],
        ));
        doc.push(Node::section(
            "Notification Preferences",
            vec![
                Node::field("Health Reminders", on_off(draft.notifications.health_reminders)),
                Node::field("Appointment Alerts", on_off(draft.notifications.appointment_alerts)),
                Node::field("Safety Alerts", on_off(draft.notifications.safety_alerts)),
                Node::field("Insurance Updates", on_off(draft.notifications.insurance_updates)),
            ],
        ));
        doc.push(Node::section(
            "Privacy & Data Protection",
            vec![
                Node::field("Biometric Authentication", on_off(draft.privacy.biometric_auth)),
                Node::field("Share Health Data", on_off(draft.privacy.share_health_data)),
                Node::field("Research Participation", on_off(draft.privacy.allow_research)),
            ],
        ));
        doc.push(Node::section(
            "Your Data Rights",
            vec![
                Node::badge("View Privacy Policy"),
                Node::badge("Download My Data (LGPD Article 15)"),
                Node::badge("Request Data Deletion (LGPD Article 18)"),
            ],
        ));
        doc.push(Node::section("Account", vec![Node::badge("Sign Out")]));
        doc.push(Node::text("HealthID v1.0.0 • Secure • LGPD Compliant"));
        Ok(doc)
    }
}
