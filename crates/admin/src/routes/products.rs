//! Partner product route handlers.
//!
//! The listing page renders a skeleton grid immediately and swaps in the
//! real card list via an HTMX fragment request, so the grid keeps its
//! shape while data loads.

use std::collections::BTreeMap;
use std::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use mercata_core::{Product, Slug};

use crate::db::{NewProduct, ProductRepository};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub short_description: String,
    pub price: String,
    pub old_price: Option<String>,
    pub partner_name: Option<String>,
    pub discounted: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            slug: product.slug.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            short_description: product.short_description.clone(),
            price: format!("${}", product.price.round_dp(2)),
            old_price: product
                .old_price
                .map(|old| format!("${}", old.round_dp(2))),
            partner_name: product.partner_name.clone(),
            discounted: product.is_discounted(),
        }
    }
}

/// Full product display data for the detail page.
pub struct ProductDetailView {
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub short_description: String,
    pub price: String,
    pub old_price: Option<String>,
    pub partner_name: Option<String>,
    pub discounted: bool,
    pub technical_specs: Vec<(String, String)>,
    pub box_contents: Vec<String>,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            short_description: product.short_description.clone(),
            price: format!("${}", product.price.round_dp(2)),
            old_price: product
                .old_price
                .map(|old| format!("${}", old.round_dp(2))),
            partner_name: product.partner_name.clone(),
            discounted: product.is_discounted(),
            technical_specs: product
                .technical_specs
                .as_ref()
                .map(|specs| {
                    specs
                        .iter()
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect()
                })
                .unwrap_or_default(),
            box_contents: product.box_contents.clone().unwrap_or_default(),
        }
    }
}

/// Add-product page template.
#[derive(Template, WebTemplate)]
#[template(path = "partner/add_product.html")]
pub struct AddProductTemplate;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "partner/product_detail.html")]
pub struct ProductDetailTemplate {
    pub product: ProductDetailView,
}

/// Product listing page template (skeleton grid).
#[derive(Template, WebTemplate)]
#[template(path = "partner/products.html")]
pub struct ProductsIndexTemplate;

/// Product card list fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "components/product_cards.html")]
pub struct ProductCardsTemplate {
    pub products: Vec<ProductCardView>,
}

/// Add-product form payload.
///
/// Free-text fields arrive as strings and are converted in
/// [`parse_form`]; `technical_specs` is one `Name: value` pair per line,
/// `box_contents` one item per line.
#[derive(Debug, Deserialize)]
pub struct AddProductForm {
    pub slug: String,
    pub name: String,
    pub price: String,
    pub old_price: Option<String>,
    pub category: String,
    pub image_url: String,
    pub short_description: String,
    pub technical_specs: Option<String>,
    pub box_contents: Option<String>,
    pub partner_name: Option<String>,
}

/// Display the add-product form.
///
/// GET /partner/add-product
pub async fn add_product(RequireAuth(_user): RequireAuth) -> impl IntoResponse {
    AddProductTemplate
}

/// Display the product listing page.
///
/// GET /partner/products
pub async fn index(RequireAuth(_user): RequireAuth) -> impl IntoResponse {
    ProductsIndexTemplate
}

/// Serve the product card list fragment.
///
/// GET /partner/products/list
///
/// # Errors
///
/// Returns `AppError::Database` if the listing query fails.
pub async fn list_fragment(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductRepository::new(state.pool()).list().await?;
    let products = products.iter().map(ProductCardView::from).collect();

    Ok(ProductCardsTemplate { products })
}

/// Display a single product.
///
/// GET /partner/products/{slug}
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a malformed slug,
/// `AppError::NotFound` if no product carries it, and
/// `AppError::Database` if the lookup fails.
pub async fn show(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let slug = Slug::parse(&slug).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let product = ProductRepository::new(state.pool())
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))?;

    Ok(ProductDetailTemplate {
        product: ProductDetailView::from(&product),
    })
}

/// Create a product from the add-product form.
///
/// POST /partner/products
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a malformed payload and
/// `AppError::Database` if the insert fails.
pub async fn create(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Form(form): Form<AddProductForm>,
) -> Result<Redirect, AppError> {
    let new = parse_form(form)?;
    let id = ProductRepository::new(state.pool()).insert(&new).await?;

    tracing::info!(product_id = %id, slug = %new.slug, "Product created");
    Ok(Redirect::to("/partner/products"))
}

/// Convert the raw form payload into a validated [`NewProduct`].
///
/// Enforces the Product contract ahead of persistence: a parseable slug, a
/// non-negative price, and a non-empty name.
fn parse_form(form: AddProductForm) -> Result<NewProduct, AppError> {
    let slug = Slug::parse(form.slug.trim()).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let name = form.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }

    let price = parse_price("price", &form.price)?;
    if price < Decimal::ZERO {
        return Err(AppError::BadRequest(format!(
            "price must be >= 0 (got {price})"
        )));
    }

    let old_price = form
        .old_price
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_price("old_price", s))
        .transpose()?;

    let technical_specs = form
        .technical_specs
        .as_deref()
        .map(parse_specs)
        .transpose()?
        .filter(|specs| !specs.is_empty());

    let box_contents = form.box_contents.as_deref().map(parse_lines).filter(|v| !v.is_empty());

    Ok(NewProduct {
        slug,
        name,
        price,
        old_price,
        category: form.category.trim().to_string(),
        image_url: form.image_url.trim().to_string(),
        short_description: form.short_description.trim().to_string(),
        technical_specs,
        box_contents,
        partner_name: form
            .partner_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    })
}

fn parse_price(field: &str, value: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(value.trim())
        .map_err(|_| AppError::BadRequest(format!("{field} must be a number")))
}

/// Parse `Name: value` lines into a spec map.
fn parse_specs(input: &str) -> Result<BTreeMap<String, String>, AppError> {
    let mut specs = BTreeMap::new();

    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (key, value) = line.split_once(':').ok_or_else(|| {
            AppError::BadRequest(format!("technical spec line {line:?} is missing a ':'"))
        })?;
        specs.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(specs)
}

fn parse_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
