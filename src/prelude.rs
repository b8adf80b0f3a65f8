//! # T3 Client Prelude
//!
//! Convenient imports for the common authenticate → fetch → export flow.
//!
//! ## Usage
//!
//! ```rust
//! use t3_client::prelude::*;
//!
//! let config = Config::new();
//! ```

/// Configuration for the T3 API client
pub use crate::config::{Config, Credentials, ExportConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

/// Main error type for the library
pub use crate::error::AppError;

/// Authentication and session management
pub use crate::session::auth::{Auth, Session};
pub use crate::session::response::Identity;

/// HTTP client
pub use crate::client::HttpClient;

/// Paginated collection fetching
pub use crate::collection::{CollectionQuery, fetch_all, fetch_page};

/// Services
pub use crate::application::services::{LicenseService, PackageService, TransferService};
pub use crate::application::services::package_service::package_id;

/// Models
pub use crate::model::{InitialQuantity, License, Page, PackageHistoryEntry, Transfer};

/// Exporters
pub use crate::export::{
    download_all, flatten_record, timestamped_csv_path, write_csv, write_csv_with_priority,
};

/// Interactive utilities
pub use crate::utils::logger::setup_logger;
pub use crate::utils::prompt::{complete_credentials, pick_license, read_optional};

/// Global constants
pub use crate::constants::*;

/// Re-export commonly used external types
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
