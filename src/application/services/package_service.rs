use crate::client::HttpClient;
use crate::collection::{CollectionQuery, fetch_all};
use crate::error::AppError;
use crate::model::history::PackageHistoryEntry;
use crate::model::page::Page;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Service for the package endpoints
///
/// Package records flow through as raw JSON objects so that exports carry
/// every field the remote schema defines.
pub struct PackageService {
    client: Arc<HttpClient>,
}

impl PackageService {
    /// Creates a new instance of the package service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Retrieves every active package for the queried license
    ///
    /// Pages through `/v2/packages/active` until exhaustion.
    pub async fn active(&self, query: &CollectionQuery) -> Result<Vec<Value>, AppError> {
        info!(
            "Loading active packages for license {}",
            query.license_number
        );
        fetch_all(&self.client, "/v2/packages/active", query).await
    }

    /// Retrieves the history for a single package
    pub async fn history(
        &self,
        license_number: &str,
        package_id: u64,
    ) -> Result<Vec<PackageHistoryEntry>, AppError> {
        debug!("Fetching history for package {}", package_id);

        let page: Page<PackageHistoryEntry> = self
            .client
            .get(
                "/v2/packages/history",
                &[
                    ("packageId", package_id.to_string()),
                    ("licenseNumber", license_number.to_string()),
                ],
            )
            .await?;
        Ok(page.data)
    }

    /// Retrieves the lab results for a single package
    pub async fn lab_results(
        &self,
        license_number: &str,
        package_id: u64,
    ) -> Result<Vec<Value>, AppError> {
        debug!("Fetching lab results for package {}", package_id);

        let page: Page<Value> = self
            .client
            .get(
                "/v2/packages/labresults",
                &[
                    ("packageId", package_id.to_string()),
                    ("licenseNumber", license_number.to_string()),
                ],
            )
            .await?;
        Ok(page.data)
    }
}

/// Extracts the numeric `id` of a raw package record
///
/// # Errors
/// Returns `InvalidInput` carrying the offending record when the field is
/// missing or not a number.
pub fn package_id(record: &Value) -> Result<u64, AppError> {
    record
        .get("id")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            AppError::InvalidInput(format!("package record missing numeric `id`: {record}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn package_id_reads_numeric_id() {
        let record = json!({"id": 42, "label": "1A4000000000000000000001"});
        assert_eq!(package_id(&record).unwrap(), 42);
    }

    #[test]
    fn package_id_rejects_missing_or_non_numeric() {
        let missing = json!({"label": "1A4"});
        let err = package_id(&missing).unwrap_err();
        assert!(err.to_string().contains("missing numeric `id`"));

        let non_numeric = json!({"id": "42"});
        assert!(package_id(&non_numeric).is_err());
    }
}
