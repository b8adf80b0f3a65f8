//! Exports active packages joined with their lab results to a CSV file.
//!
//! One row is written per (package, lab result) pair: lab result fields
//! are prefixed with `labresult.` and the package fields follow.

use serde_json::{Map, Value};
use std::path::Path;
use t3_client::prelude::*;

fn join_row(package: &Value, lab_result: Value) -> Value {
    let mut row = Map::new();
    if let Value::Object(fields) = lab_result {
        for (key, value) in fields {
            row.insert(format!("labresult.{key}"), value);
        }
    }
    if let Value::Object(fields) = package {
        for (key, value) in fields {
            row.insert(key.clone(), value.clone());
        }
    }
    Value::Object(row)
}

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

    let packages_service = PackageService::new(client.clone());
    let packages = packages_service.active(&query).await?;
    if packages.is_empty() {
        info!("No active packages found for the selected license");
        return Ok(());
    }

    let mut rows = Vec::new();
    for package in &packages {
        let id = package_id(package)?;
        let results = packages_service
            .lab_results(&license.license_number, id)
            .await?;
        info!("Lab results attached for package {}: {}", id, results.len());
        for lab_result in results {
            rows.push(join_row(package, lab_result));
        }
    }

    if rows.is_empty() {
        info!("No lab results found for the selected license");
        return Ok(());
    }

    let path = timestamped_csv_path(
        Path::new(&config.export.output_dir),
        &license.license_number,
        "active_packages_lab_results",
    )?;
    let written = write_csv_with_priority(
        &path,
        &rows,
        &["label", "item.name", "quantity", "unitOfMeasureAbbreviation"],
    )?;

    info!("Report generated: {} ({} rows)", path.display(), written);
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
