//! # T3 Client
//!
//! Client library and export tooling for the T3 track-and-trace API
//! (`api.trackandtrace.tools`). The library covers three concerns:
//!
//! - **Authentication**: exchanging hostname/username/password credentials
//!   for a bearer token (`session`).
//! - **Paginated fetching**: walking listing endpoints page by page until
//!   the server reports exhaustion (`collection`).
//! - **Export**: writing fetched records to CSV files or downloading
//!   manifest PDFs into per-license directories (`export`).
//!
//! The binaries under `src/bin/` are small, strictly sequential flows:
//! authenticate, fetch, export. Any failure aborts the run with a non-zero
//! exit code; there is no retry or partial-result recovery.
//!
//! # Example
//! ```ignore
//! use t3_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Arc::new(HttpClient::new(config).await?);
//! let licenses = LicenseService::new(client.clone()).list().await?;
//! ```

/// Typed services over the HTTP client
pub mod application;
/// HTTP client with bearer-token authentication
pub mod client;
/// Paginated collection fetching
pub mod collection;
/// Environment-driven configuration
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Error types
pub mod error;
/// CSV and manifest PDF exporters
pub mod export;
/// Wire models for API payloads
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Session authentication
pub mod session;
/// Logging, env and prompt utilities
pub mod utils;

/// Crate version as compiled into the binary
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
pub fn version() -> &'static str {
    VERSION
}
