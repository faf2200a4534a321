//! External service clients for the admin panel.

pub mod auth;
