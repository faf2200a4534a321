//! Domain models for the admin panel.

pub mod session;

pub use session::{CurrentUser, keys as session_keys};
