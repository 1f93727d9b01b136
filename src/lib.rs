//! HealthID application core.
//!
//! The crate models the client-side core of the HealthID prototype: a
//! single-slot session store, an identity resolver for the login flow, a
//! route guard/navigator, and one view renderer per page backed by static
//! sample datasets. There is no persistence, no network layer, and no
//! backend; every state transition is synchronous and in-memory.

pub mod app;
pub mod auth;
pub mod data;
pub mod forms;
pub mod views;
