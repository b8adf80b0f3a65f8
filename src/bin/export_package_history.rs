//! Exports active packages with their initial packaged quantity to a CSV.
//!
//! The initial quantity is not a field on the package record; it only
//! appears in the free-text history descriptions, so each package's
//! history is fetched and parsed.

use serde_json::Value;
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
    let packages_service = PackageService::new(client.clone());
    let mut packages = packages_service.active(&query).await?;
    if packages.is_empty() {
        info!("No active packages found for the selected license");
        return Ok(());
    }

    for package in &mut packages {
        let id = package_id(package)?;
        let history = packages_service
            .history(&license.license_number, id)
            .await?;

        let initial = history
            .iter()
            .flat_map(|entry| entry.descriptions.iter())
            .find_map(|description| InitialQuantity::parse(description));

        if let (Value::Object(fields), Some(initial)) = (&mut *package, initial) {
            fields.insert("initialQuantity".to_string(), initial.quantity.into());
            fields.insert(
                "initialUnitOfMeasure".to_string(),
                initial.unit.into(),
            );
        }
    }

    let path = timestamped_csv_path(
        Path::new(&config.export.output_dir),
        &license.license_number,
        "active_packages_history",
    )?;
    let rows = write_csv_with_priority(
        &path,
        &packages,
        &[
            "label",
            "item.name",
            "quantity",
            "unitOfMeasureAbbreviation",
            "initialQuantity",
            "initialUnitOfMeasure",
        ],
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
