use crate::client::HttpClient;
use crate::error::AppError;
use crate::model::license::License;
use std::sync::Arc;
use tracing::{debug, info};

/// Service for the license endpoints
pub struct LicenseService {
    client: Arc<HttpClient>,
}

impl LicenseService {
    /// Creates a new instance of the license service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Retrieves all licenses available to the authenticated account
    ///
    /// # Returns
    /// * `Ok(Vec<License>)` - Licenses in server order
    /// * `Err(AppError)` - If the request fails
    pub async fn list(&self) -> Result<Vec<License>, AppError> {
        info!("Retrieving licenses");

        let licenses: Vec<License> = self.client.get("/v2/licenses", &[]).await?;

        debug!("Retrieved {} licenses", licenses.len());
        Ok(licenses)
    }
}
