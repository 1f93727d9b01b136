//! Page renderers, one per view.
//!
//! Each renderer is a pure function of the session contents, the route
//! parameters, and its own draft state. Sample datasets live in
//! [`crate::data`].

mod consultation;
mod dashboards;
mod index;
mod insurance;
mod login;
mod records;
mod settings;
mod teleconsult;

pub use consultation::DoctorConsultationView;
pub use dashboards::{DoctorDashboardView, EmployerDashboardView, PatientDashboardView, SesiDashboardView};
pub use index::{IndexView, NotFoundView};
pub use insurance::InsuranceView;
pub use login::LoginView;
pub use records::HealthRecordsView;
pub use settings::SettingsView;
pub use teleconsult::TeleconsultationView;

use super::registry::ViewRegistry;

/// Create a ViewRegistry with every page registered.
pub fn create_default_registry() -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    registry.register(Box::new(IndexView)).expect("Failed to register IndexView");
    registry.register(Box::new(LoginView)).expect("Failed to register LoginView");
    registry.register(Box::new(PatientDashboardView)).expect("Failed to register PatientDashboardView");
    registry.register(Box::new(DoctorDashboardView)).expect("Failed to register DoctorDashboardView");
    registry.register(Box::new(EmployerDashboardView)).expect("Failed to register EmployerDashboardView");
    registry.register(Box::new(SesiDashboardView)).expect("Failed to register SesiDashboardView");
    registry.register(Box::new(HealthRecordsView)).expect("Failed to register HealthRecordsView");
    registry.register(Box::new(TeleconsultationView)).expect("Failed to register TeleconsultationView");
    registry.register(Box::new(InsuranceView)).expect("Failed to register InsuranceView");
    registry.register(Box::new(SettingsView)).expect("Failed to register SettingsView");
    registry.register(Box::new(DoctorConsultationView)).expect("Failed to register DoctorConsultationView");
    registry.register(Box::new(NotFoundView)).expect("Failed to register NotFoundView");
    registry
}
