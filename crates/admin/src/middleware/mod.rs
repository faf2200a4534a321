//! Middleware for the admin panel.

pub mod auth;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, set_current_user};
pub use session::{COOKIE_POLICY, CookiePolicy, create_session_layer};
