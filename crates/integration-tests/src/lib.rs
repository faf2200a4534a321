//! Integration tests for Mercata.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p mercata-cli -- migrate
//!
//! # Start the admin server
//! cargo run -p mercata-admin
//!
//! # Run integration tests
//! cargo test -p mercata-integration-tests -- --ignored
//! ```
//!
//! Tests are `#[ignore]`d by default because they require a running
//! server; `ADMIN_BASE_URL` overrides the default target of
//! `http://localhost:3001`.
