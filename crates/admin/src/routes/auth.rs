//! Authentication route handlers.
//!
//! Credentials are exchanged with the external auth provider; only the
//! issued access token is kept, server-side, in the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::cookie::time::{Duration, OffsetDateTime};
use tower_sessions::{Expiry, Session};

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalAuth, set_current_user};
use crate::models::{CurrentUser, session_keys};
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Render the login page.
///
/// GET /auth/login
///
/// Someone already signed in is sent straight to the dashboard.
pub async fn login_page(OptionalAuth(user): OptionalAuth) -> Response {
    if user.is_some() {
        return Redirect::to("/admin/fulfillment").into_response();
    }

    LoginTemplate { error: None }.into_response()
}

/// Exchange credentials with the auth provider and establish a session.
///
/// POST /auth/login
///
/// # Errors
///
/// Provider outages surface as `AppError::Auth`; rejected credentials
/// re-render the login page with an error message instead.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let signin = match state
        .auth()
        .sign_in_with_password(&form.email, &form.password)
        .await
    {
        Ok(signin) => signin,
        Err(AuthError::InvalidCredentials) => {
            return Ok(LoginTemplate {
                error: Some("Invalid email or password".to_string()),
            }
            .into_response());
        }
        Err(e) => return Err(e.into()),
    };

    let user = CurrentUser {
        email: form.email,
        access_token: signin.access_token,
    };
    set_current_user(&session, &user)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Session lives no longer than the provider token it carries
    if let Some(expires_in) = signin.expires_in {
        session.set_expiry(Some(session_expiry(expires_in)));
    }

    set_sentry_user(&user.email);
    tracing::info!(email = %user.email, "User signed in");

    Ok(Redirect::to("/admin/fulfillment").into_response())
}

/// Terminate the caller's authenticated session.
///
/// POST /api/auth/signout
///
/// Invokes the auth provider's sign-out with the session's access token,
/// destroys the local session, and redirects to the site root. A provider
/// failure is logged and answered with a JSON error payload; the user
/// simply remains signed in - no retry.
pub async fn sign_out(State(state): State<AppState>, session: Session) -> Response {
    let user: Option<CurrentUser> = match session.get(session_keys::CURRENT_USER).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Failed to read session: {e}");
            None
        }
    };

    if let Some(user) = user {
        if let Err(e) = state.auth().sign_out(&user.access_token).await {
            tracing::error!("Auth provider sign-out failed: {e}");
            return signout_error_response(&e);
        }
    }

    // Destroy the entire session, which also invalidates the cookie
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {e}");
    }

    clear_sentry_user();
    signout_redirect(&state.config().site_url).into_response()
}

/// Absolute session expiry matching the provider token lifetime.
fn session_expiry(expires_in: i64) -> Expiry {
    Expiry::AtDateTime(OffsetDateTime::now_utc() + Duration::seconds(expires_in))
}

/// Build the post-sign-out redirect to the site root.
fn signout_redirect(site_url: &str) -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, format!("{site_url}/"))])
}

/// Build the sign-out failure response: 500 with `{"error": message}`.
fn signout_error_response(err: &AuthError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_renders() {
        let html = LoginTemplate { error: None }.render().expect("render");
        assert!(html.contains("action=\"/auth/login\""));
        assert!(!html.contains("class=\"form-error\""));
    }

    #[test]
    fn test_login_page_shows_error() {
        let html = LoginTemplate {
            error: Some("Invalid email or password".to_string()),
        }
        .render()
        .expect("render");
        assert!(html.contains("Invalid email or password"));
    }

    #[test]
    fn test_session_expiry_tracks_token_lifetime() {
        let now = OffsetDateTime::now_utc();
        match session_expiry(3600) {
            Expiry::AtDateTime(at) => {
                assert!(at > now + Duration::seconds(3500));
                assert!(at <= now + Duration::seconds(3700));
            }
            other => panic!("expected absolute expiry, got {other:?}"),
        }
    }

    #[test]
    fn test_signout_redirect_is_302_to_site_root() {
        let response = signout_redirect("https://mercata.dev").into_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).map(|v| v.as_bytes()),
            Some("https://mercata.dev/".as_bytes())
        );
    }

    #[tokio::test]
    async fn test_signout_error_is_500_json() {
        let err = AuthError::Api {
            status: 503,
            message: "provider unavailable".to_string(),
        };
        let response = signout_error_response(&err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert!(json["error"].as_str().expect("error string").contains("503"));
    }
}
