/// License listing
pub mod license_service;
/// Active packages, history and lab results
pub mod package_service;
/// Transfers and manifest PDFs
pub mod transfer_service;

pub use license_service::LicenseService;
pub use package_service::PackageService;
pub use transfer_service::TransferService;
