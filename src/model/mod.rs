/// Package history entries and quantity parsing
pub mod history;
/// License records
pub mod license;
/// Paginated listing envelope
pub mod page;
/// Transfer (manifest) records
pub mod transfer;

pub use history::{InitialQuantity, PackageHistoryEntry};
pub use license::License;
pub use page::Page;
pub use transfer::Transfer;
