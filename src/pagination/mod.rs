//! Pagination module
//!
//! The paginated resource fetcher behind the member listing endpoints.
//!
//! # Overview
//!
//! The service pages listings by snowflake: each request names the
//! identifier to resume after and a page size (at most
//! [`MAX_PAGE_SIZE`]), and a page smaller than the ceiling means the
//! listing is exhausted. [`drain_after`] collects every page into one
//! sequence, preserving partial results when a page fails; [`page_stream`]
//! is the lazy page-at-a-time variant for callers that process pages as
//! they arrive.

mod cursor;
mod types;

pub use cursor::{drain_after, page_stream};
pub use types::{Cursored, Drained, MAX_PAGE_SIZE};

#[cfg(test)]
mod tests;
