//! Pagination types
//!
//! Defines the response envelope accessors, the pagination state and
//! the page-number strategy used by every list endpoint.

use crate::error::{Error, Result};
use crate::models::lenient_bool;
use serde_json::Value;

/// Default query parameter carrying the page number
pub const PAGE_PARAM: &str = "num_page";

/// Records of one response envelope (`data`)
pub fn data_records(body: &Value) -> Result<&[Value]> {
    match body.get("data") {
        Some(Value::Array(records)) => Ok(records),
        Some(other) => Err(Error::malformed(format!(
            "'data' is not an array: {other}"
        ))),
        None => Err(Error::malformed("response has no 'data' array")),
    }
}

/// Continuation flag of a response envelope; missing means no more pages
pub fn has_more(body: &Value) -> bool {
    body.get("has_more").is_some_and(lenient_bool)
}

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this page number next
    Continue { page: u32 },
    /// No more pages
    Done,
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Page number to request next
    pub page: u32,
    /// Pages fetched so far
    pub pages_fetched: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create state with a starting page
    pub fn with_page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }
}

/// Page number pagination with a page cap
///
/// Request parameters look like `?num_page=3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNumberPaginator {
    /// Query parameter name for the page number
    pub page_param: String,
    /// Maximum pages fetched in one walk
    pub max_pages: u32,
}

impl PageNumberPaginator {
    /// Create a paginator using `num_page`
    pub fn new(max_pages: u32) -> Self {
        Self {
            page_param: PAGE_PARAM.to_string(),
            max_pages,
        }
    }

    /// Starting state for a walk beginning at `start_page` (0 is read as 1)
    pub fn start(&self, start_page: u32) -> PaginationState {
        PaginationState::with_page(start_page.max(1))
    }

    /// Query parameters for the page in `state`
    pub fn params(&self, state: &PaginationState) -> Vec<(String, String)> {
        vec![(self.page_param.clone(), state.page.to_string())]
    }

    /// Record a fetched page and decide what comes next
    ///
    /// Fails with `PaginationLimitExceeded` when the cap is reached while
    /// the server still reports more pages, or when the page number would
    /// overflow.
    pub fn process_response(
        &self,
        body: &Value,
        records_count: usize,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        state.pages_fetched += 1;
        state.add_fetched(records_count as u64);

        if !has_more(body) {
            state.mark_done();
            return Ok(NextPage::Done);
        }

        if state.pages_fetched >= self.max_pages {
            state.mark_done();
            return Err(Error::PaginationLimitExceeded {
                max_pages: self.max_pages,
            });
        }

        let Some(next) = state.page.checked_add(1) else {
            state.mark_done();
            return Err(Error::PaginationLimitExceeded {
                max_pages: self.max_pages,
            });
        };
        state.page = next;
        Ok(NextPage::Continue { page: state.page })
    }
}
