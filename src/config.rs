use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the T3 API
///
/// Held in memory only for the duration of a run; never persisted.
pub struct Credentials {
    /// Metrc hostname the account belongs to (e.g. `mo.metrc.com`)
    pub hostname: String,
    /// Username for the Metrc account
    pub username: String,
    /// Password for the Metrc account
    pub password: String,
    /// One-time password, required only by some hostnames
    pub otp: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the T3 REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for export output
pub struct ExportConfig {
    /// Directory where CSV files and manifest PDFs are written
    pub output_dir: String,
    /// Number of records to request per page
    pub page_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the T3 API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Export output configuration
    pub export: ExportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Loads `.env` first, then reads `T3_HOSTNAME`, `T3_USERNAME`,
    /// `T3_PASSWORD`, `T3_OTP`, `T3_BASE_URL`, `T3_TIMEOUT`, `T3_PAGE_SIZE`
    /// and `T3_OUTPUT_DIR`. Credentials left empty here can be filled in
    /// interactively by the binaries.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                hostname: get_env_or_default("T3_HOSTNAME", String::new()),
                username: get_env_or_default("T3_USERNAME", String::new()),
                password: get_env_or_default("T3_PASSWORD", String::new()),
                otp: get_env_or_none("T3_OTP"),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("T3_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("T3_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            export: ExportConfig {
                output_dir: get_env_or_default("T3_OUTPUT_DIR", String::from(DEFAULT_OUTPUT_DIR)),
                page_size: get_env_or_default("T3_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            },
        }
    }

    /// Returns true when hostname, username and password are all present
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.credentials.hostname.is_empty()
            && !self.credentials.username.is_empty()
            && !self.credentials.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_credentials() -> Credentials {
        Credentials {
            hostname: String::new(),
            username: String::new(),
            password: String::new(),
            otp: None,
        }
    }

    #[test]
    fn has_credentials_requires_all_three() {
        let mut config = Config {
            credentials: blank_credentials(),
            rest_api: RestApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            export: ExportConfig {
                output_dir: DEFAULT_OUTPUT_DIR.to_string(),
                page_size: DEFAULT_PAGE_SIZE,
            },
        };
        assert!(!config.has_credentials());

        config.credentials.hostname = "mo.metrc.com".to_string();
        config.credentials.username = "user@example.com".to_string();
        assert!(!config.has_credentials());

        config.credentials.password = "hunter2".to_string();
        assert!(config.has_credentials());
    }
}
