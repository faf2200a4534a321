//! Warehouse fulfillment page shell.
//!
//! Binds the route to the WMS interface component; the component owns its
//! own data fetching and workflow.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;
use crate::middleware::RequireAuth;

/// Fulfillment page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/fulfillment.html")]
pub struct FulfillmentTemplate;

/// Display the warehouse fulfillment interface.
///
/// GET /admin/fulfillment
pub async fn show(RequireAuth(_user): RequireAuth) -> impl IntoResponse {
    FulfillmentTemplate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_exactly_one_component() {
        let html = FulfillmentTemplate.render().expect("render");
        assert_eq!(html.matches("data-component=").count(), 1);
        assert!(html.contains("data-component=\"wms-interface\""));
    }

    #[test]
    fn test_page_metadata() {
        let html = FulfillmentTemplate.render().expect("render");
        assert!(html.contains("<title>Fulfillment"));
    }
}
