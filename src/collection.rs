//! Paginated collection fetching
//!
//! The listing endpoints all share the same shape: `licenseNumber`, `page`
//! and `pageSize` query parameters, and a [`Page`] envelope in response.
//! [`fetch_all`] walks pages in strictly increasing order and accumulates
//! records in server order. No page is ever requested twice, nothing is
//! de-duplicated or reordered, and a failed page aborts the whole fetch.

use crate::client::HttpClient;
use crate::error::AppError;
use crate::model::page::Page;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Query parameters shared by the listing endpoints
#[derive(Debug, Clone)]
pub struct CollectionQuery {
    /// License the listing is scoped to
    pub license_number: String,
    /// Records to request per page
    pub page_size: u32,
    /// Optional server-side filter expression, e.g. `packagedDate__gte:2024-01-01`
    pub filter: Option<String>,
}

impl CollectionQuery {
    /// Creates a query for the given license and page size
    pub fn new(license_number: impl Into<String>, page_size: u32) -> Self {
        Self {
            license_number: license_number.into(),
            page_size,
            filter: None,
        }
    }

    /// Adds a server-side filter expression
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Builds the query parameters for one page request
    pub fn to_params(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("licenseNumber", self.license_number.clone()),
            ("page", page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(filter) = &self.filter {
            params.push(("filter", filter.clone()));
        }
        params
    }
}

/// Fetches a single page of a listing endpoint
///
/// # Arguments
/// * `client` - Authenticated HTTP client
/// * `path` - Listing endpoint path (e.g. `/v2/packages/active`)
/// * `query` - License, page size and optional filter
/// * `page` - One-based page index
pub async fn fetch_page<T: DeserializeOwned>(
    client: &HttpClient,
    path: &str,
    query: &CollectionQuery,
    page: u32,
) -> Result<Page<T>, AppError> {
    debug!("Fetching page {} of {}", page, path);
    client.get(path, &query.to_params(page)).await
}

/// Fetches every page of a listing endpoint
///
/// Starts at page 1 and strictly increments until a page comes back with
/// fewer than `page_size` records or the accumulated count reaches the
/// server's reported total. Records are returned in server order.
///
/// # Returns
/// * `Ok(Vec<T>)` - All records across all pages
/// * `Err(AppError)` - If any page request fails; no partial results
pub async fn fetch_all<T: DeserializeOwned>(
    client: &HttpClient,
    path: &str,
    query: &CollectionQuery,
) -> Result<Vec<T>, AppError> {
    if query.page_size == 0 {
        return Err(AppError::InvalidInput(
            "page size must be positive".to_string(),
        ));
    }

    let mut records: Vec<T> = Vec::new();
    let mut current_page = 1u32;

    loop {
        let page = fetch_page::<T>(client, path, query, current_page).await?;
        let fetched = page.data.len();
        let total = page.total;
        records.extend(page.data);

        info!(
            "Loaded {} records from page {} of {}, {} total so far",
            fetched,
            current_page,
            path,
            records.len()
        );

        // A short page means the server is exhausted; the running count
        // against `total` bounds the walk even when every page is full.
        if fetched < query.page_size as usize || records.len() as u64 >= total {
            break;
        }
        current_page += 1;
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_include_license_page_and_size() {
        let query = CollectionQuery::new("CUL000003", 500);
        let params = query.to_params(3);
        assert_eq!(
            params,
            vec![
                ("licenseNumber", "CUL000003".to_string()),
                ("page", "3".to_string()),
                ("pageSize", "500".to_string()),
            ]
        );
    }

    #[test]
    fn filter_is_appended_when_set() {
        let query =
            CollectionQuery::new("CUL000003", 500).with_filter("packagedDate__gte:2024-01-01");
        let params = query.to_params(1);
        assert_eq!(
            params.last(),
            Some(&("filter", "packagedDate__gte:2024-01-01".to_string()))
        );
    }
}
