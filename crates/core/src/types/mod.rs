//! Core types for Mercata.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod product;
pub mod slug;

pub use id::*;
pub use product::{Product, ProductError};
pub use slug::{Slug, SlugError};
