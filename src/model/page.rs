use serde::{Deserialize, Serialize};

/// Envelope returned by the listing endpoints
///
/// Every collection endpoint responds with a `data` array plus pagination
/// metadata. Metadata fields default to zero so that endpoints which omit
/// them still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records for this page, in server order
    pub data: Vec<T>,
    /// Total number of records across all pages
    #[serde(default)]
    pub total: u64,
    /// One-based index of this page
    #[serde(default)]
    pub page: u32,
    /// Page size the server applied
    #[serde(default)]
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Number of pages needed to cover `total` records at `page_size`
    #[must_use]
    pub fn total_pages(total: u64, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        total.div_ceil(u64::from(page_size))
    }
}
