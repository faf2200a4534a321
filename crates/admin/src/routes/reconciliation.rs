//! Financial reconciliation page shell.
//!
//! Binds the route to the reconciliation dashboard component, which
//! matches order, payment-processor, and bank records on its own.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;
use crate::middleware::RequireAuth;

/// Reconciliation page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/reconciliation.html")]
pub struct ReconciliationTemplate;

/// Display the financial reconciliation dashboard.
///
/// GET /admin/reconciliation
pub async fn show(RequireAuth(_user): RequireAuth) -> impl IntoResponse {
    ReconciliationTemplate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_exactly_one_component() {
        let html = ReconciliationTemplate.render().expect("render");
        assert_eq!(html.matches("data-component=").count(), 1);
        assert!(html.contains("data-component=\"reconciliation-dashboard\""));
    }
}
