//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Pagination query parameters for list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (max 100). Defaults to 20.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// Pagination metadata included in list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items.
    pub total: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

/// One page of records.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse<T> {
    /// Records on this page, in id order.
    pub data: Vec<T>,
    /// Where this page sits in the full listing.
    pub pagination: PaginationMeta,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PaginationParams {
    /// Clamps `per_page` to the allowed maximum of 100.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, 100),
        }
    }
}

/// Cuts one page out of a full, already ordered listing.
#[must_use]
pub fn paginate<T>(items: Vec<T>, params: &PaginationParams) -> ListResponse<T> {
    let params = params.clamped();
    let total = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let per_page = params.per_page;
    let page = params.page;
    let total_pages = total.div_ceil(per_page);

    let start = page.saturating_sub(1).saturating_mul(per_page) as usize;
    let data = items
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();

    ListResponse {
        data,
        pagination: PaginationMeta {
            page,
            per_page,
            total,
            total_pages,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_and_size() {
        let params = PaginationParams {
            page: 0,
            per_page: 500,
        }
        .clamped();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 100);
    }

    #[test]
    fn paginate_slices_and_counts() {
        let params = PaginationParams {
            page: 2,
            per_page: 3,
        };
        let page = paginate((1..=7).collect::<Vec<u32>>(), &params);
        assert_eq!(page.data, vec![4, 5, 6]);
        assert_eq!(page.pagination.total, 7);
        assert_eq!(page.pagination.total_pages, 3);

        let past_end = paginate(
            vec![1, 2],
            &PaginationParams {
                page: 9,
                per_page: 20,
            },
        );
        assert!(past_end.data.is_empty());
        assert_eq!(past_end.pagination.total_pages, 1);
    }

    #[test]
    fn empty_listing_has_no_pages() {
        let page = paginate(Vec::<u32>::new(), &PaginationParams::default());
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }
}
