//! Session-related types.
//!
//! Types stored in the session for authentication state. The auth
//! provider's access token travels here, through the request context,
//! rather than in an ambient client-side credential.

use serde::{Deserialize, Serialize};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the signed-in user and
/// act on their behalf against the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's email address.
    pub email: String,
    /// Access token issued by the auth provider.
    pub access_token: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current signed-in user.
    pub const CURRENT_USER: &str = "current_user";
}
