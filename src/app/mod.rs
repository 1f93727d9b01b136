pub mod builder;
pub mod config;
pub mod event;
pub mod router;
pub mod session;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::broadcast;
use tracing::{info, instrument};

use builder::AppBuilder;
use config::HealthIdConfig;
use event::{AppEvent, Toast};
use router::{GuardDecision, Router, ViewKey};
use session::SessionStore;

use crate::auth::{IdentityResolver, LoginRequest};
use crate::forms::{Attachment, ConsultationDraft, Drafts, FormError};
use crate::views::registry::ViewRegistry;
use crate::views::{Document, RenderContext};

/// Result of a navigation: the view that ended up rendering, its document,
/// and whether the guard redirected on the way.
#[derive(Debug, Clone)]
pub struct NavOutcome {
    pub path: String,
    pub view: ViewKey,
    pub document: Document,
    pub redirected_from: Option<String>,
}

/// The HealthID application core.
///
/// Owns the single-slot session store, the route table, the view registry,
/// the identity resolver, and the per-view draft state. Views never touch
/// shared state directly; the privileged operations (session set,
/// navigation) all live here.
pub struct App {
    pub(crate) config: Arc<HealthIdConfig>,
    pub(crate) json: bool,
    pub(crate) session: SessionStore,
    pub(crate) router: Router,
    pub(crate) views: ViewRegistry,
    pub(crate) resolver: IdentityResolver,
    pub(crate) drafts: Drafts,
    pub(crate) current_view: Option<ViewKey>,
    pub(crate) event_tx: broadcast::Sender<AppEvent>,
}

impl App {
    /// Create a new builder for App.
    pub fn builder(config: HealthIdConfig) -> AppBuilder {
        AppBuilder::new(config)
    }

    /// Access the configuration.
    pub fn config(&self) -> &HealthIdConfig {
        &self.config
    }

    /// Access the session store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Access the route table.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Access the view registry.
    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    /// Current draft state (for inspection and tests).
    pub fn drafts(&self) -> &Drafts {
        &self.drafts
    }

    /// Subscribe to app events.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }

    /// Broadcast an event; in `--json` mode it also goes to stdout as NDJSON.
    pub(crate) fn emit(&self, event: AppEvent) {
        if self.json {
            println!("{}", serde_json::to_string(&event).unwrap_or_default());
        }
        // No receivers is fine; events are observability, not control flow.
        let _ = self.event_tx.send(event);
    }

    fn toast(&self, title: &str, description: String) {
        self.emit(AppEvent::Toast(Toast::new(title, description)));
    }

    /// Navigate to a path: resolve the route, apply its access policy,
    /// reset drafts when the view changes, and render.
    #[instrument(skip(self), fields(path = %path))]
    pub fn goto(&mut self, path: &str) -> Result<NavOutcome> {
        let identity = self.session.get();

        let mut target_path = path.to_string();
        let mut matched = self.router.resolve(path);
        let mut redirected_from = None;

        if self.router.guard(&matched, identity.as_ref()) == GuardDecision::RedirectToLogin {
            info!(from = %path, "Guard redirecting to login");
            self.emit(AppEvent::RedirectedToLogin {
                from: path.to_string(),
            });
            redirected_from = Some(path.to_string());
            target_path = "/login".to_string();
            matched = self.router.resolve("/login");
        }

        if self.current_view != Some(matched.view) {
            if let Some(previous) = self.current_view.take() {
                self.emit(AppEvent::DraftDiscarded { view: previous });
            }
            self.drafts = Drafts::new(self.config.app.language);
            if matched.view == ViewKey::DoctorConsultation {
                self.drafts.consultation =
                    ConsultationDraft::for_patient(matched.params.get("patientId").map(String::as_str));
            }
        }
        self.current_view = Some(matched.view);

        let ctx = RenderContext {
            identity: identity.as_ref(),
            params: &matched.params,
            drafts: &self.drafts,
        };
        let document = self.views.render(matched.view, &ctx)?;

        self.emit(AppEvent::Navigated {
            path: target_path.clone(),
            view: matched.view,
        });

        Ok(NavOutcome {
            path: target_path,
            view: matched.view,
            document,
            redirected_from,
        })
    }

    /// Resolve the login form, install the identity, and navigate to the
    /// role's home view.
    #[instrument(skip(self, request), fields(role = %request.role))]
    pub fn login(&mut self, request: &LoginRequest) -> Result<NavOutcome> {
        let identity = self.resolver.resolve(request)?;
        info!(role = %identity.role, name = %identity.display_name, "Login resolved");

        self.session.set(Some(identity.clone()));
        self.toast("Login Successful", format!("Welcome, {}!", identity.display_name));
        self.emit(AppEvent::LoginSucceeded {
            identity: identity.clone(),
        });

        self.goto(identity.role.home_path())
    }

    /// Biometric login: identical contract to [`App::login`], after a fixed
    /// delay simulating the hardware round trip. Always completes; there is
    /// no cancellation or failure path.
    pub async fn biometric_login(&mut self, request: &LoginRequest) -> Result<NavOutcome> {
        self.emit(AppEvent::BiometricRequested { role: request.role });
        self.toast(
            "Biometric Authentication",
            "Please use your fingerprint or face recognition".to_string(),
        );
        tokio::time::sleep(Duration::from_millis(self.config.login.biometric_delay_ms)).await;
        self.login(request)
    }

    /// Clear the session and navigate home. Always valid.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<NavOutcome> {
        self.session.set(None);
        self.emit(AppEvent::LoggedOut);
        self.toast("Logged Out", "You have been securely logged out.".to_string());
        self.goto("/")
    }

    /// Update one consultation form field by dotted path.
    pub fn update_consultation(&mut self, path: &str, value: &str) -> Result<(), FormError> {
        self.drafts.consultation.set_field(path, value)
    }

    /// Append files to the consultation attachments, preserving order.
    pub fn attach(&mut self, files: impl IntoIterator<Item = Attachment>) {
        self.drafts.consultation.add_attachments(files);
    }

    /// Submit the consultation form and return to the doctor dashboard.
    pub fn save_consultation(&mut self) -> Result<NavOutcome> {
        let health_id = self.drafts.consultation.health_id.clone();
        self.emit(AppEvent::ConsultationSaved {
            health_id: health_id.clone(),
        });
        self.toast(
            "Consultation Saved",
            "Patient records have been updated successfully.".to_string(),
        );
        self.goto("/doctor-dashboard")
    }

    /// Flip one settings toggle; returns the new value.
    pub fn toggle_setting(&mut self, name: &str) -> Result<bool, FormError> {
        self.drafts.settings.toggle(name)
    }

    /// Change the settings language selector.
    pub fn set_language(&mut self, language: config::Language) {
        self.drafts.settings.language = language;
    }

    /// Declared affordance: signals the request, nothing is exported.
    pub fn request_data_export(&self) {
        self.toast(
            "Data Export Requested",
            "Your data export will be ready within 48 hours. You'll receive an email notification."
                .to_string(),
        );
    }

    /// Declared affordance: signals the request, nothing is deleted.
    pub fn request_data_deletion(&self) {
        self.toast(
            "Data Deletion Requested",
            "Your request has been submitted. Account deletion will be processed within 30 days as per LGPD requirements."
                .to_string(),
        );
    }
}
