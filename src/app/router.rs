use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::app::session::{Identity, Role};

/// Closed set of renderable views, one per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKey {
    Index,
    Login,
    PatientDashboard,
    DoctorDashboard,
    EmployerDashboard,
    SesiDashboard,
    HealthRecords,
    Teleconsultation,
    Insurance,
    Settings,
    DoctorConsultation,
    NotFound,
}

impl std::fmt::Display for ViewKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ViewKey::Index => "index",
            ViewKey::Login => "login",
            ViewKey::PatientDashboard => "patient_dashboard",
            ViewKey::DoctorDashboard => "doctor_dashboard",
            ViewKey::EmployerDashboard => "employer_dashboard",
            ViewKey::SesiDashboard => "sesi_dashboard",
            ViewKey::HealthRecords => "health_records",
            ViewKey::Teleconsultation => "teleconsultation",
            ViewKey::Insurance => "insurance",
            ViewKey::Settings => "settings",
            ViewKey::DoctorConsultation => "doctor_consultation",
            ViewKey::NotFound => "not_found",
        };
        write!(f, "{}", name)
    }
}

/// Per-route access policy, declared in the route table.
///
/// The default table only uses `Public` and `RequiresSession` (the observed
/// behavior guards `/settings` and nothing else), but `RequiresRole` is
/// honored by the guard so a table can tighten dashboards without code
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    Public,
    RequiresSession,
    RequiresRole(Role),
}

impl std::fmt::Display for AccessPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessPolicy::Public => write!(f, "public"),
            AccessPolicy::RequiresSession => write!(f, "requires-session"),
            AccessPolicy::RequiresRole(role) => write!(f, "requires-role({})", role),
        }
    }
}

/// One entry of the static route table.
#[derive(Debug, Clone)]
pub struct Route {
    /// Path pattern. Segments, with `{name}` for a required parameter and
    /// `{name?}` for an optional trailing parameter.
    pub pattern: &'static str,
    pub view: ViewKey,
    pub policy: AccessPolicy,
}

/// Parameters captured from the matched path pattern.
pub type RouteParams = HashMap<String, String>;

/// Result of resolving a path against the table.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub view: ViewKey,
    pub policy: AccessPolicy,
    pub params: RouteParams,
}

/// Outcome of the guard check applied to a [`RouteMatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Redirect to `/login` before rendering.
    RedirectToLogin,
}

/// Maps requested paths to views plus an access policy.
///
/// The table is constructed once at startup and never mutated. Resolution is
/// total: unrecognized paths fall through to the `not_found` view, which is
/// always public.
pub struct Router {
    routes: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Build the default table. Every route is public except `/settings`.
    pub fn new() -> Self {
        Self::with_routes(vec![
            Route {
                pattern: "/",
                view: ViewKey::Index,
                policy: AccessPolicy::Public,
            },
            Route {
                pattern: "/login",
                view: ViewKey::Login,
                policy: AccessPolicy::Public,
            },
            Route {
                pattern: "/patient-dashboard",
                view: ViewKey::PatientDashboard,
                policy: AccessPolicy::Public,
            },
            Route {
                pattern: "/doctor-dashboard",
                view: ViewKey::DoctorDashboard,
                policy: AccessPolicy::Public,
            },
            Route {
                pattern: "/employer-dashboard",
                view: ViewKey::EmployerDashboard,
                policy: AccessPolicy::Public,
            },
            Route {
                pattern: "/sesi-dashboard",
                view: ViewKey::SesiDashboard,
                policy: AccessPolicy::Public,
            },
            Route {
                pattern: "/health-records",
                view: ViewKey::HealthRecords,
                policy: AccessPolicy::Public,
            },
            Route {
                pattern: "/teleconsultation",
                view: ViewKey::Teleconsultation,
                policy: AccessPolicy::Public,
            },
            Route {
                pattern: "/insurance",
                view: ViewKey::Insurance,
                policy: AccessPolicy::Public,
            },
            Route {
                pattern: "/settings",
                view: ViewKey::Settings,
                policy: AccessPolicy::RequiresSession,
            },
            Route {
                pattern: "/doctor/consultation/{patientId?}",
                view: ViewKey::DoctorConsultation,
                policy: AccessPolicy::Public,
            },
        ])
    }

    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a requested path. Unrecognized paths map to `not_found`
    /// unconditionally, independent of session state.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        for route in &self.routes {
            if let Some(params) = match_pattern(route.pattern, path) {
                return RouteMatch {
                    view: route.view,
                    policy: route.policy,
                    params,
                };
            }
        }
        RouteMatch {
            view: ViewKey::NotFound,
            policy: AccessPolicy::Public,
            params: RouteParams::new(),
        }
    }

    /// Apply a route's access policy against the current identity.
    pub fn guard(&self, matched: &RouteMatch, identity: Option<&Identity>) -> GuardDecision {
        match matched.policy {
            AccessPolicy::Public => GuardDecision::Allow,
            AccessPolicy::RequiresSession => match identity {
                Some(_) => GuardDecision::Allow,
                None => GuardDecision::RedirectToLogin,
            },
            AccessPolicy::RequiresRole(role) => match identity {
                Some(id) if id.role == role => GuardDecision::Allow,
                _ => GuardDecision::RedirectToLogin,
            },
        }
    }
}

/// Match a path against a pattern, capturing `{name}` segments.
///
/// A trailing `{name?}` segment may be omitted from the path. Returns the
/// captured parameters on a match.
fn match_pattern(pattern: &str, path: &str) -> Option<RouteParams> {
    let pattern_segs: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_segs: Vec<&str> = path.trim_matches('/').split('/').collect();

    // "/" normalizes to a single empty segment on both sides.
    let mut params = RouteParams::new();
    let mut pi = 0;
    for (i, seg) in pattern_segs.iter().enumerate() {
        if let Some(name) = seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            if let Some(name) = name.strip_suffix('?') {
                // Optional segment must be last in the pattern.
                debug_assert_eq!(i, pattern_segs.len() - 1);
                if let Some(value) = path_segs.get(pi) {
                    if !value.is_empty() {
                        params.insert(name.to_string(), value.to_string());
                    }
                    pi += 1;
                }
            } else {
                let value = path_segs.get(pi)?;
                if value.is_empty() {
                    return None;
                }
                params.insert(name.to_string(), value.to_string());
                pi += 1;
            }
        } else {
            if path_segs.get(pi) != Some(seg) {
                return None;
            }
            pi += 1;
        }
    }
    if pi != path_segs.len() {
        return None;
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root() {
        let router = Router::new();
        assert_eq!(router.resolve("/").view, ViewKey::Index);
    }

    #[test]
    fn test_resolve_exact_paths() {
        let router = Router::new();
        assert_eq!(router.resolve("/login").view, ViewKey::Login);
        assert_eq!(router.resolve("/settings").view, ViewKey::Settings);
        assert_eq!(router.resolve("/sesi-dashboard").view, ViewKey::SesiDashboard);
    }

    #[test]
    fn test_resolve_optional_param_present() {
        let router = Router::new();
        let m = router.resolve("/doctor/consultation/BR-555");
        assert_eq!(m.view, ViewKey::DoctorConsultation);
        assert_eq!(m.params.get("patientId").map(String::as_str), Some("BR-555"));
    }

    #[test]
    fn test_resolve_optional_param_absent() {
        let router = Router::new();
        let m = router.resolve("/doctor/consultation");
        assert_eq!(m.view, ViewKey::DoctorConsultation);
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_unknown_path_falls_back_to_not_found() {
        let router = Router::new();
        let m = router.resolve("/unknown-path");
        assert_eq!(m.view, ViewKey::NotFound);
        assert_eq!(m.policy, AccessPolicy::Public);
    }

    #[test]
    fn test_only_settings_requires_session() {
        let router = Router::new();
        for route in router.routes() {
            if route.view == ViewKey::Settings {
                assert_eq!(route.policy, AccessPolicy::RequiresSession);
            } else {
                assert_eq!(route.policy, AccessPolicy::Public, "{}", route.pattern);
            }
        }
    }

    #[test]
    fn test_guard_redirects_without_session() {
        let router = Router::new();
        let m = router.resolve("/settings");
        assert_eq!(router.guard(&m, None), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn test_guard_role_policy() {
        let router = Router::with_routes(vec![Route {
            pattern: "/doctor-dashboard",
            view: ViewKey::DoctorDashboard,
            policy: AccessPolicy::RequiresRole(Role::Doctor),
        }]);
        let m = router.resolve("/doctor-dashboard");
        let patient = Identity {
            id: "1".to_string(),
            display_name: "João Silva".to_string(),
            role: Role::Patient,
            health_id: Some("BR-1".to_string()),
            registration_id: None,
            avatar_ref: None,
        };
        assert_eq!(router.guard(&m, Some(&patient)), GuardDecision::RedirectToLogin);
        assert_eq!(router.guard(&m, None), GuardDecision::RedirectToLogin);
    }
}
