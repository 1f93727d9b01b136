//! Identity resolution for the login flow.
//!
//! The resolver turns the in-memory login form into an [`Identity`]. Inputs
//! are never rejected today: the validation policy is a deliberate no-op and
//! empty fields fall back to role defaults. The `Result` shape exists so a
//! stricter policy can be substituted without changing caller contracts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::config::LoginSection;
use crate::app::session::{Identity, Role};

/// The login form as delivered by the UI layer. Never serialized to a wire
/// format; serde is for event payloads and the `--json` CLI mode only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
    /// Free-text name; empty falls back to the role default.
    #[serde(default)]
    pub name: String,
    /// Health ID for patients, Registration ID for doctors. May be empty.
    #[serde(default)]
    pub id: String,
    /// Optional PIN, accepted but unvalidated.
    #[serde(default)]
    pub pin: String,
}

impl LoginRequest {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            name: String::new(),
            id: String::new(),
            pin: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_pin(mut self, pin: impl Into<String>) -> Self {
        self.pin = pin.into();
        self
    }
}

/// The result of a validation policy check.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginVerdict {
    /// Proceed with identity construction.
    Allow,
    /// Block the login with a reason string.
    Reject(String),
}

impl LoginVerdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, LoginVerdict::Allow)
    }
}

impl fmt::Display for LoginVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginVerdict::Allow => write!(f, "ALLOW"),
            LoginVerdict::Reject(reason) => write!(f, "REJECT: {}", reason),
        }
    }
}

/// Pluggable login validation. The shipped policy accepts everything;
/// substituting a stricter one must preserve default substitution as a
/// fallback, not reject empty input.
pub trait ValidationPolicy: Send + Sync {
    fn check(&self, request: &LoginRequest) -> LoginVerdict;
}

/// The current (identity/no-op) policy: every login succeeds.
pub struct AcceptAll;

impl ValidationPolicy for AcceptAll {
    fn check(&self, _request: &LoginRequest) -> LoginVerdict {
        LoginVerdict::Allow
    }
}

/// Error from identity resolution.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Login rejected: {0}")]
    Rejected(String),
}

/// Turns a [`LoginRequest`] into a fully populated [`Identity`].
pub struct IdentityResolver {
    defaults: LoginSection,
    policy: Box<dyn ValidationPolicy>,
}

impl IdentityResolver {
    pub fn new(defaults: LoginSection) -> Self {
        Self {
            defaults,
            policy: Box::new(AcceptAll),
        }
    }

    /// Replace the validation policy.
    pub fn with_policy(mut self, policy: Box<dyn ValidationPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve the request into an identity.
    ///
    /// Exactly one of `health_id` / `registration_id` is populated, matching
    /// the requested role; the other stays absent. An empty name falls back
    /// to the role-specific default display name.
    pub fn resolve(&self, request: &LoginRequest) -> Result<Identity, LoginError> {
        if let LoginVerdict::Reject(reason) = self.policy.check(request) {
            return Err(LoginError::Rejected(reason));
        }

        let display_name = if request.name.trim().is_empty() {
            match request.role {
                Role::Patient => self.defaults.default_patient_name.clone(),
                Role::Doctor => self.defaults.default_doctor_name.clone(),
            }
        } else {
            request.name.clone()
        };

        let (health_id, registration_id) = match request.role {
            Role::Patient => (Some(request.id.clone()), None),
            Role::Doctor => (None, Some(request.id.clone())),
        };

        Ok(Identity {
            id: uuid::Uuid::new_v4().to_string(),
            display_name,
            role: request.role,
            health_id,
            registration_id,
            avatar_ref: Some(self.defaults.avatar_ref.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> IdentityResolver {
        IdentityResolver::new(LoginSection::default())
    }

    #[test]
    fn test_patient_gets_health_id_only() {
        let identity = resolver()
            .resolve(&LoginRequest::new(Role::Patient).with_id("BR-12345678"))
            .unwrap();
        assert_eq!(identity.health_id.as_deref(), Some("BR-12345678"));
        assert!(identity.registration_id.is_none());
    }

    #[test]
    fn test_doctor_gets_registration_id_only() {
        let identity = resolver()
            .resolve(&LoginRequest::new(Role::Doctor).with_id("CRM-4411"))
            .unwrap();
        assert_eq!(identity.registration_id.as_deref(), Some("CRM-4411"));
        assert!(identity.health_id.is_none());
    }

    #[test]
    fn test_empty_name_falls_back_to_role_default() {
        let patient = resolver().resolve(&LoginRequest::new(Role::Patient)).unwrap();
        assert_eq!(patient.display_name, "João Silva");
        let doctor = resolver().resolve(&LoginRequest::new(Role::Doctor)).unwrap();
        assert_eq!(doctor.display_name, "Dr. Maria Santos");
    }

    #[test]
    fn test_provided_name_is_kept() {
        let identity = resolver()
            .resolve(&LoginRequest::new(Role::Patient).with_name("Ana Costa"))
            .unwrap();
        assert_eq!(identity.display_name, "Ana Costa");
    }

    #[test]
    fn test_pin_is_accepted_unvalidated() {
        let identity = resolver()
            .resolve(&LoginRequest::new(Role::Patient).with_pin("0000"))
            .unwrap();
        assert_eq!(identity.role, Role::Patient);
    }

    #[test]
    fn test_rejecting_policy_surfaces_error() {
        struct DenyAll;
        impl ValidationPolicy for DenyAll {
            fn check(&self, _request: &LoginRequest) -> LoginVerdict {
                LoginVerdict::Reject("maintenance window".to_string())
            }
        }
        let result = resolver()
            .with_policy(Box::new(DenyAll))
            .resolve(&LoginRequest::new(Role::Patient));
        assert!(matches!(result, Err(LoginError::Rejected(_))));
    }

    #[test]
    fn test_identity_ids_are_unique() {
        let r = resolver();
        let a = r.resolve(&LoginRequest::new(Role::Patient)).unwrap();
        let b = r.resolve(&LoginRequest::new(Role::Patient)).unwrap();
        assert_ne!(a.id, b.id);
    }
}
