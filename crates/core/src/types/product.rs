//! The Product data contract.
//!
//! This is the shared shape describing a sellable item. It is the external
//! contract any storage or API layer must satisfy to feed the product
//! pages, so field names and optionality are fixed.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::slug::Slug;

/// Errors that make a [`Product`] ill-formed.
#[derive(thiserror::Error, Debug, Clone)]
pub enum ProductError {
    /// The current price is negative.
    #[error("price must be >= 0 (got {price})")]
    NegativePrice {
        /// The offending price.
        price: Decimal,
    },
    /// The display name is empty.
    #[error("name cannot be empty")]
    EmptyName,
}

/// A sellable item listed by a partner.
///
/// `id` and `slug` are assigned at creation and immutable afterwards.
/// `old_price`, when present, is conventionally greater than `price` so the
/// UI can display a discount; that convention is deliberately not enforced
/// here - it is a rendering concern, not a data invariant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier, immutable once assigned.
    pub id: ProductId,
    /// Unique URL-safe identifier, immutable.
    pub slug: Slug,
    /// Display label.
    pub name: String,
    /// Current price; must be >= 0.
    pub price: Decimal,
    /// Prior price, shown struck through next to `price`.
    pub old_price: Option<Decimal>,
    /// Classification label.
    pub category: String,
    /// Location of the primary media.
    pub image_url: String,
    /// Summary text.
    pub short_description: String,
    /// Attribute name to value string.
    pub technical_specs: Option<BTreeMap<String, String>>,
    /// Ordered list of items included in the box.
    pub box_contents: Option<Vec<String>>,
    /// Attribution to the selling partner.
    pub partner_name: Option<String>,
}

impl Product {
    /// Check the well-formedness of this product.
    ///
    /// A product is well-formed iff its `price` is non-negative and its
    /// name is non-empty. (`id` and `slug` are guaranteed by construction.)
    ///
    /// # Errors
    ///
    /// Returns [`ProductError`] describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.price < Decimal::ZERO {
            return Err(ProductError::NegativePrice { price: self.price });
        }

        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }

        Ok(())
    }

    /// Whether the product should be rendered with a discount badge.
    ///
    /// True only when `old_price` is present and actually higher than the
    /// current price.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.old_price.is_some_and(|old| old > self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(1),
            slug: Slug::parse("wireless-mouse").unwrap(),
            name: "Wireless Mouse".to_string(),
            price: Decimal::new(2990, 2),
            old_price: None,
            category: "peripherals".to_string(),
            image_url: "https://cdn.mercata.dev/products/wireless-mouse.jpg".to_string(),
            short_description: "A 2.4GHz wireless mouse.".to_string(),
            technical_specs: None,
            box_contents: None,
            partner_name: None,
        }
    }

    #[test]
    fn test_well_formed_product() {
        assert!(sample_product().validate().is_ok());
    }

    #[test]
    fn test_zero_price_is_well_formed() {
        let mut product = sample_product();
        product.price = Decimal::ZERO;
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut product = sample_product();
        product.price = Decimal::new(-1, 2);
        assert!(matches!(
            product.validate(),
            Err(ProductError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut product = sample_product();
        product.name = "  ".to_string();
        assert!(matches!(product.validate(), Err(ProductError::EmptyName)));
    }

    #[test]
    fn test_old_price_below_price_is_still_well_formed() {
        // old_price > price is a UI convention, not a data invariant.
        let mut product = sample_product();
        product.old_price = Some(Decimal::new(100, 2));
        assert!(product.validate().is_ok());
        assert!(!product.is_discounted());
    }

    #[test]
    fn test_discount_detection() {
        let mut product = sample_product();
        product.old_price = Some(Decimal::new(3990, 2));
        assert!(product.is_discounted());
    }

    #[test]
    fn test_serde_field_names() {
        let product = sample_product();
        let json = serde_json::to_value(&product).unwrap();
        // The wire contract uses snake_case field names.
        assert_eq!(json["slug"], "wireless-mouse");
        assert_eq!(json["short_description"], "A 2.4GHz wireless mouse.");
        assert!(json["old_price"].is_null());
        assert!(json["partner_name"].is_null());
    }
}
