//! Exports every active package for a chosen license to a CSV file.

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

    let mut query = CollectionQuery::new(&license.license_number, config.export.page_size);
    if let Some(date) = read_optional("Start packaged date (YYYY-MM-DD, blank for all): ")? {
        query = query.with_filter(format!("packagedDate__gte:{date}"));
    }

    let packages = PackageService::new(client.clone()).active(&query).await?;
    if packages.is_empty() {
        info!("No active packages found for the selected license");
        return Ok(());
    }

    let path = timestamped_csv_path(
        Path::new(&config.export.output_dir),
        &license.license_number,
        "active_packages",
    )?;
    let rows = write_csv_with_priority(
        &path,
        &packages,
        &["label", "item.name", "quantity", "unitOfMeasureAbbreviation"],
    )?;

    info!("Report generated: {} ({} rows)", path.display(), rows);
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
