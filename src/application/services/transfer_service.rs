use crate::client::HttpClient;
use crate::collection::{CollectionQuery, fetch_all};
use crate::error::AppError;
use crate::model::transfer::Transfer;
use std::sync::Arc;
use tracing::{debug, info};

/// Service for the transfer endpoints
pub struct TransferService {
    client: Arc<HttpClient>,
}

impl TransferService {
    /// Creates a new instance of the transfer service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Retrieves every incoming transfer for the queried license
    pub async fn incoming(&self, query: &CollectionQuery) -> Result<Vec<Transfer>, AppError> {
        info!(
            "Loading incoming transfers for license {}",
            query.license_number
        );
        fetch_all(&self.client, "/v2/transfers/incoming", query).await
    }

    /// Retrieves every outgoing transfer for the queried license
    pub async fn outgoing(&self, query: &CollectionQuery) -> Result<Vec<Transfer>, AppError> {
        info!(
            "Loading outgoing transfers for license {}",
            query.license_number
        );
        fetch_all(&self.client, "/v2/transfers/outgoing", query).await
    }

    /// Downloads the manifest PDF for one transfer
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - Raw PDF bytes
    /// * `Err(AppError)` - If the request fails
    pub async fn manifest_pdf(
        &self,
        license_number: &str,
        manifest_number: &str,
    ) -> Result<Vec<u8>, AppError> {
        debug!("Downloading manifest {}", manifest_number);

        self.client
            .get_bytes(
                "/v2/transfers/manifest",
                &[
                    ("manifestNumber", manifest_number.to_string()),
                    ("licenseNumber", license_number.to_string()),
                ],
            )
            .await
    }
}
