use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Closed set of login roles. Determines which identifier field an
/// [`Identity`] carries and which dashboard login routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    /// Path of the role's home view, used by the post-login navigation.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Patient => "/patient-dashboard",
            Role::Doctor => "/doctor-dashboard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Doctor => write!(f, "doctor"),
        }
    }
}

/// The authenticated subject held by the [`SessionStore`].
///
/// Immutable once constructed; login replaces it wholesale and logout clears
/// it. Exactly one of `health_id` / `registration_id` is populated,
/// determined by `role`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub display_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
}

impl Identity {
    /// The role-matching identifier field.
    pub fn role_id(&self) -> Option<&str> {
        match self.role {
            Role::Patient => self.health_id.as_deref(),
            Role::Doctor => self.registration_id.as_deref(),
        }
    }
}

/// Single-slot holder of the current [`Identity`] or its absence.
///
/// The store holds at most one identity at a time; `set` swaps the slot
/// wholesale so observers never see a partially-constructed identity.
/// Cloning the store clones the handle, not the slot.
#[derive(Clone, Default)]
pub struct SessionStore {
    slot: Arc<RwLock<Option<Identity>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current identity, if any. Side-effect free.
    pub fn get(&self) -> Option<Identity> {
        self.slot.read().expect("session lock poisoned").clone()
    }

    /// Replace the held identity atomically. `set(None)` is the logout
    /// operation and is always valid.
    pub fn set(&self, identity: Option<Identity>) {
        *self.slot.write().expect("session lock poisoned") = identity;
    }

    /// Derived as `identity != absent`; consistent with `get` at all times.
    pub fn is_authenticated(&self) -> bool {
        self.slot.read().expect("session lock poisoned").is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient() -> Identity {
        Identity {
            id: "p-1".to_string(),
            display_name: "João Silva".to_string(),
            role: Role::Patient,
            health_id: Some("BR-12345678".to_string()),
            registration_id: None,
            avatar_ref: None,
        }
    }

    #[test]
    fn test_store_starts_empty() {
        let store = SessionStore::new();
        assert!(store.get().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let store = SessionStore::new();
        let id = patient();
        store.set(Some(id.clone()));
        assert_eq!(store.get(), Some(id));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_set_none_clears_slot() {
        let store = SessionStore::new();
        store.set(Some(patient()));
        store.set(None);
        assert!(store.get().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clone_shares_slot() {
        let store = SessionStore::new();
        let handle = store.clone();
        store.set(Some(patient()));
        assert!(handle.is_authenticated());
    }
}
