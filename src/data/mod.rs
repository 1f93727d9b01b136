//! Static sample datasets backing the view renderers.
//!
//! Everything here is hardcoded display data local to one view; nothing is
//! persisted or fetched.

pub mod doctor;
pub mod employer;
pub mod insurance;
pub mod patient;
pub mod records;
pub mod sesi;
pub mod teleconsult;
