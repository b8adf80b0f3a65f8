/// CSV export of fetched records
pub mod csv;
/// Manifest PDF download into per-license directories
pub mod manifest;

pub use self::csv::{flatten_record, timestamped_csv_path, write_csv, write_csv_with_priority};
pub use self::manifest::download_all;
