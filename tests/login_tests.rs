//! Identity resolver contract tests.

use healthid::app::config::LoginSection;
use healthid::app::session::Role;
use healthid::auth::{
    AcceptAll, IdentityResolver, LoginError, LoginRequest, LoginVerdict, ValidationPolicy,
};

fn make_resolver() -> IdentityResolver {
    IdentityResolver::new(LoginSection::default())
}

#[test]
fn test_patient_login_populates_health_id_only() {
    let resolver = make_resolver();
    let identity = resolver
        .resolve(&LoginRequest::new(Role::Patient).with_id("BR-42"))
        .unwrap();
    assert_eq!(identity.health_id.as_deref(), Some("BR-42"));
    assert_eq!(identity.registration_id, None);
}

#[test]
fn test_doctor_login_populates_registration_id_only() {
    let resolver = make_resolver();
    let identity = resolver
        .resolve(&LoginRequest::new(Role::Doctor).with_id("CRM-9"))
        .unwrap();
    assert_eq!(identity.registration_id.as_deref(), Some("CRM-9"));
    assert_eq!(identity.health_id, None);
}

#[test]
fn test_empty_name_falls_back_to_role_default() {
    let resolver = make_resolver();
    let patient = resolver.resolve(&LoginRequest::new(Role::Patient)).unwrap();
    assert_eq!(patient.display_name, "João Silva");
    let doctor = resolver.resolve(&LoginRequest::new(Role::Doctor)).unwrap();
    assert_eq!(doctor.display_name, "Dr. Maria Santos");
}

#[test]
fn test_whitespace_name_counts_as_empty() {
    let resolver = make_resolver();
    let identity = resolver
        .resolve(&LoginRequest::new(Role::Patient).with_name("   "))
        .unwrap();
    assert_eq!(identity.display_name, "João Silva");
}

#[test]
fn test_provided_name_is_kept() {
    let resolver = make_resolver();
    let identity = resolver
        .resolve(&LoginRequest::new(Role::Doctor).with_name("Dr. Paulo Mendes"))
        .unwrap();
    assert_eq!(identity.display_name, "Dr. Paulo Mendes");
}

#[test]
fn test_each_login_mints_a_fresh_id() {
    let resolver = make_resolver();
    let request = LoginRequest::new(Role::Patient);
    let a = resolver.resolve(&request).unwrap();
    let b = resolver.resolve(&request).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_avatar_comes_from_defaults() {
    let resolver = make_resolver();
    let identity = resolver.resolve(&LoginRequest::new(Role::Patient)).unwrap();
    assert_eq!(identity.avatar_ref.as_deref(), Some("/api/placeholder/100/100"));
}

#[test]
fn test_accept_all_admits_everything() {
    assert!(AcceptAll.check(&LoginRequest::new(Role::Patient)).is_allowed());
    assert!(AcceptAll
        .check(&LoginRequest::new(Role::Doctor).with_pin("0000"))
        .is_allowed());
}

#[test]
fn test_rejecting_policy_blocks_resolution() {
    struct DenyGuests;
    impl ValidationPolicy for DenyGuests {
        fn check(&self, request: &LoginRequest) -> LoginVerdict {
            if request.id.is_empty() {
                LoginVerdict::Reject("an identifier is required".to_string())
            } else {
                LoginVerdict::Allow
            }
        }
    }

    let resolver = make_resolver().with_policy(Box::new(DenyGuests));
    let err = resolver.resolve(&LoginRequest::new(Role::Patient)).unwrap_err();
    assert!(matches!(err, LoginError::Rejected(_)));

    resolver
        .resolve(&LoginRequest::new(Role::Patient).with_id("BR-1"))
        .expect("identified login passes");
}
