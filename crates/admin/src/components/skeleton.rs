//! Product card loading placeholder.

use askama::Template;
use askama_web::WebTemplate;

/// A fixed-shape, non-interactive placeholder matching the layout of a
/// real product card.
///
/// Rendered while the card list loads so the grid does not shift. Takes no
/// input, carries no state, and never fails to render.
#[derive(Template, WebTemplate)]
#[template(path = "components/product_card_skeleton.html")]
pub struct ProductCardSkeleton;
