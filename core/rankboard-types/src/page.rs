//! Pagination requests and results.

use crate::RankedEntrant;
use serde::{Deserialize, Serialize};

/// Page size used when the caller asks for something out of range.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Largest page size served.
pub const MAX_PAGE_LIMIT: usize = 100;

/// A normalized page request: `page >= 1` and `limit` in `1..=MAX_PAGE_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    /// Builds a request, normalizing out-of-range input.
    ///
    /// A page below 1 becomes page 1. A limit outside `1..=MAX_PAGE_LIMIT`
    /// falls back to [`DEFAULT_PAGE_LIMIT`].
    #[must_use]
    pub fn new(page: i64, limit: i64) -> Self {
        let page = usize::try_from(page).ok().filter(|p| *p >= 1).unwrap_or(1);
        let limit = usize::try_from(limit)
            .ok()
            .filter(|l| (1..=MAX_PAGE_LIMIT).contains(l))
            .unwrap_or(DEFAULT_PAGE_LIMIT);
        Self { page, limit }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Index of the first entry on this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// One window of the ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub entries: Vec<RankedEntrant>,
    pub page: usize,
    pub limit: usize,
    pub total_count: usize,
    pub has_more: bool,
}
