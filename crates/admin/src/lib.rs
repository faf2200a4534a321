//! Mercata Admin library.
//!
//! This crate provides the partner/admin panel as a library, allowing it
//! to be tested and reused by the binary and the integration tests.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering
//! - External auth provider (HTTP) for session credentials
//! - `PostgreSQL` for products and session storage

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
