use serde::{Deserialize, Serialize};

use crate::app::router::ViewKey;
use crate::app::session::{Identity, Role};

/// Transient notification surfaced to the user ("toast").
///
/// Delivery is the UI layer's business; the core only emits the message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Every observable action in the app produces a typed `AppEvent`.
///
/// Events are broadcast on the app's channel; in `--json` mode they are also
/// written to stdout as NDJSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A login resolved and the identity was installed in the session store.
    LoginSucceeded { identity: Identity },
    /// Biometric confirmation was requested; login follows after the delay.
    BiometricRequested { role: Role },
    /// The session slot was cleared.
    LoggedOut,
    /// Navigation resolved to a view.
    Navigated { path: String, view: ViewKey },
    /// A guarded route was requested without a session.
    RedirectedToLogin { from: String },
    /// The per-view draft state was discarded on navigation away.
    DraftDiscarded { view: ViewKey },
    /// The consultation form was submitted.
    ConsultationSaved { health_id: String },
    /// Transient notification for the UI layer.
    Toast(Toast),
}

impl AppEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &'static str {
        match self {
            AppEvent::LoginSucceeded { .. } => "login_succeeded",
            AppEvent::BiometricRequested { .. } => "biometric_requested",
            AppEvent::LoggedOut => "logged_out",
            AppEvent::Navigated { .. } => "navigated",
            AppEvent::RedirectedToLogin { .. } => "redirected_to_login",
            AppEvent::DraftDiscarded { .. } => "draft_discarded",
            AppEvent::ConsultationSaved { .. } => "consultation_saved",
            AppEvent::Toast(_) => "toast",
        }
    }
}
