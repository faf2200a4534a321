//! HTTP route handlers for the admin panel.
//!
//! The route table is explicit and assembled once at startup:
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (DB ping)
//!
//! GET  /                       - Redirect to the fulfillment page
//!
//! # Admin pages
//! GET  /admin/fulfillment      - Warehouse fulfillment interface
//! GET  /admin/reconciliation   - Financial reconciliation dashboard
//! GET  /admin/partners/add     - Partner onboarding form
//!
//! # Partner pages
//! GET  /partner/products         - Partner product listing
//! GET  /partner/products/list    - Product card list fragment (HTMX)
//! GET  /partner/products/{slug}  - Product detail page
//! POST /partner/products         - Create a product
//! GET  /partner/add-product      - Add-product form
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Exchange credentials with the auth provider
//! POST /api/auth/signout       - Invalidate the session, redirect to site root
//! ```

pub mod auth;
pub mod fulfillment;
pub mod partners;
pub mod products;
pub mod reconciliation;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the admin page routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/fulfillment", get(fulfillment::show))
        .route("/reconciliation", get(reconciliation::show))
        .route("/partners/add", get(partners::add))
}

/// Create the partner page routes router.
pub fn partner_routes() -> Router<AppState> {
    Router::new()
        .route("/add-product", get(products::add_product))
        .route("/products", get(products::index).post(products::create))
        .route("/products/list", get(products::list_fragment))
        .route("/products/{slug}", get(products::show))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", get(auth::login_page).post(auth::login))
}

/// Create the API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/auth/signout", post(auth::sign_out))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .nest("/admin", admin_routes())
        .nest("/partner", partner_routes())
        .nest("/auth", auth_routes())
        .nest("/api", api_routes())
}

/// Redirect the bare root to the fulfillment page.
async fn root() -> Redirect {
    Redirect::to("/admin/fulfillment")
}
