use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A page of items with offset-pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> PaginatedList<T> {
    /// Metadata comes from `total_count`, not from `items`, so an
    /// out-of-range page still reports the real totals.
    pub fn new(items: Vec<T>, total_count: u64, page_number: u32, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(u64::from(page_size))
        };
        Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages,
            has_previous_page: page_number > 1,
            has_next_page: u64::from(page_number) < total_pages,
        }
    }
}
