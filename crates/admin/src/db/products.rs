//! Product repository for database operations.
//!
//! Maps rows of `admin.product` to the shared [`Product`] contract.
//! Queries are runtime-checked (`query_as`) so the workspace builds
//! without a live database.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;

use mercata_core::{Product, ProductId, Slug};

use super::RepositoryError;

/// A product as it is inserted, before an ID is assigned.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub slug: Slug,
    pub name: String,
    pub price: Decimal,
    pub old_price: Option<Decimal>,
    pub category: String,
    pub image_url: String,
    pub short_description: String,
    pub technical_specs: Option<BTreeMap<String, String>>,
    pub box_contents: Option<Vec<String>>,
    pub partner_name: Option<String>,
}

/// Row shape for `admin.product`.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    slug: String,
    name: String,
    price: Decimal,
    old_price: Option<Decimal>,
    category: String,
    image_url: String,
    short_description: String,
    technical_specs: Option<Json<BTreeMap<String, String>>>,
    box_contents: Option<Vec<String>>,
    partner_name: Option<String>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let slug = Slug::parse(&row.slug).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid slug in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            slug,
            name: row.name,
            price: row.price,
            old_price: row.old_price,
            category: row.category,
            image_url: row.image_url,
            short_description: row.short_description,
            technical_specs: row.technical_specs.map(|Json(specs)| specs),
            box_contents: row.box_contents,
            partner_name: row.partner_name,
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored slug is invalid.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, slug, name, price, old_price, category, image_url,
                   short_description, technical_specs, box_contents, partner_name
            FROM admin.product
            ORDER BY id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a product by its slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if the stored slug is invalid.
    pub async fn get_by_slug(&self, slug: &Slug) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, slug, name, price, old_price, category, image_url,
                   short_description, technical_specs, box_contents, partner_name
            FROM admin.product
            WHERE slug = $1
            ",
        )
        .bind(slug.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Insert a new product and return its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including
    /// slug uniqueness violations).
    pub async fn insert(&self, new: &NewProduct) -> Result<ProductId, RepositoryError> {
        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO admin.product
                (slug, name, price, old_price, category, image_url,
                 short_description, technical_specs, box_contents, partner_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            ",
        )
        .bind(new.slug.as_str())
        .bind(&new.name)
        .bind(new.price)
        .bind(new.old_price)
        .bind(&new.category)
        .bind(&new.image_url)
        .bind(&new.short_description)
        .bind(new.technical_specs.clone().map(Json))
        .bind(&new.box_contents)
        .bind(&new.partner_name)
        .fetch_one(self.pool)
        .await?;

        Ok(ProductId::new(id))
    }
}
