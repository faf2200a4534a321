//! Partner onboarding page shell.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;
use crate::middleware::RequireAuth;

/// Add-partner page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/partners_add.html")]
pub struct AddPartnerTemplate;

/// Display the partner onboarding form.
///
/// GET /admin/partners/add
pub async fn add(RequireAuth(_user): RequireAuth) -> impl IntoResponse {
    AddPartnerTemplate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_exactly_one_component() {
        let html = AddPartnerTemplate.render().expect("render");
        assert_eq!(html.matches("data-component=").count(), 1);
        assert!(html.contains("data-component=\"add-partner-form\""));
    }

    #[test]
    fn test_heading_and_back_link() {
        let html = AddPartnerTemplate.render().expect("render");
        assert!(html.contains("Add partner"));
        assert!(html.contains("class=\"back-link\""));
    }
}
