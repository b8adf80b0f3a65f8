//! Manifest PDF download
//!
//! Downloads the manifest PDF for each transfer and writes it under a
//! subdirectory named after the license, creating the directory if absent.
//! Downloads run strictly sequentially; a later download with the same
//! manifest number silently replaces the earlier file.

use crate::application::services::TransferService;
use crate::error::AppError;
use crate::model::transfer::Transfer;
use std::fs;
use std::path::Path;
use tracing::info;

/// Downloads every manifest PDF for one license
///
/// Writes `<output_dir>/<license>/<manifest_number>.pdf` for each
/// transfer. Any failed download or write aborts the run.
///
/// # Returns
/// * `Ok(u32)` - Number of files written
/// * `Err(AppError)` - If any download or write fails
pub async fn download_all(
    service: &TransferService,
    license_number: &str,
    transfers: &[Transfer],
    output_dir: &Path,
) -> Result<u32, AppError> {
    let license_dir = output_dir.join(license_number);
    fs::create_dir_all(&license_dir)?;

    let mut written = 0u32;
    for transfer in transfers {
        let bytes = service
            .manifest_pdf(license_number, &transfer.manifest_number)
            .await?;

        let path = license_dir.join(format!("{}.pdf", transfer.manifest_number));
        fs::write(&path, &bytes)?;
        written += 1;

        info!(
            "Saved manifest {} ({} bytes) to {}",
            transfer.manifest_number,
            bytes.len(),
            path.display()
        );
    }

    Ok(written)
}
