//! Session middleware configuration.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions, issuing the
//! session cookie under a fixed, process-wide [`CookiePolicy`].

use sqlx::PgPool;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

/// Default session expiry in seconds (24 hours of inactivity).
///
/// Login replaces this with an absolute expiry when the auth provider
/// reports a token lifetime.
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// How the session cookie is issued.
///
/// This is a pure constant: it does not vary with the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    /// Cookie name.
    pub name: &'static str,
    /// Cookie path.
    pub path: &'static str,
    /// SameSite attribute.
    pub same_site: SameSite,
    /// Whether the cookie is HTTPS-only.
    pub secure: bool,
    /// Whether the cookie is hidden from client-side script.
    pub http_only: bool,
}

/// The session cookie policy.
///
/// `http_only` is false so client-side script can read the cookie;
/// `secure` stays true in every environment, local development included.
pub const COOKIE_POLICY: CookiePolicy = CookiePolicy {
    name: "sb",
    path: "/",
    same_site: SameSite::Lax,
    secure: true,
    http_only: false,
};

/// Create the session layer with `PostgreSQL` store.
///
/// # Panics
///
/// Panics if the schema name or table name is invalid (should never happen
/// with hardcoded "admin" and "session" values).
#[must_use]
pub fn create_session_layer(pool: &PgPool) -> SessionManagerLayer<PostgresStore> {
    // The session table is created by migration in the admin schema.
    let store = PostgresStore::new(pool.clone())
        .with_schema_name("admin")
        .expect("valid schema name")
        .with_table_name("session")
        .expect("valid table name");

    SessionManagerLayer::new(store)
        .with_name(COOKIE_POLICY.name)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(COOKIE_POLICY.secure)
        .with_same_site(COOKIE_POLICY.same_site)
        .with_http_only(COOKIE_POLICY.http_only)
        .with_path(COOKIE_POLICY.path)
}
