//! Pagination module
//!
//! # Overview
//!
//! List endpoints answer with an envelope of one page of records and a
//! continuation flag:
//!
//! ```json
//! { "data": [ ... ], "has_more": true }
//! ```
//!
//! The `PageNumberPaginator` walks `num_page=1, 2, ...` until the flag
//! is false. It refuses to walk past a configured page cap so a server
//! that always reports more pages cannot keep a caller looping forever.

mod types;

pub use types::{data_records, has_more, NextPage, PageNumberPaginator, PaginationState};

#[cfg(test)]
mod tests;
