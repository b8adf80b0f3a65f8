//! Downloads every incoming transfer manifest PDF for a chosen license.
//!
//! Files land under `<output_dir>/<license_number>/<manifest_number>.pdf`.

use std::path::Path;
use t3_client::prelude::*;

async fn run() -> Result<(), AppError> {
    let mut config = Config::new();
    if !config.has_credentials() {
        complete_credentials(&mut config.credentials)?;
    }

    let client = Arc::new(HttpClient::new(config).await?);
    let config = client.config();

    let licenses = LicenseService::new(client.clone()).list().await?;
    let license = pick_license(&licenses)?;

    let query = CollectionQuery::new(&license.license_number, config.export.page_size);
    let transfers_service = TransferService::new(client.clone());
    let transfers = transfers_service.incoming(&query).await?;
    if transfers.is_empty() {
        info!("No incoming transfers found for the selected license");
        return Ok(());
    }

    let written = download_all(
        &transfers_service,
        &license.license_number,
        &transfers,
        Path::new(&config.export.output_dir),
    )
    .await?;

    info!(
        "Downloaded {} manifests into {}/{}",
        written, config.export.output_dir, license.license_number
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    setup_logger();
    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}
