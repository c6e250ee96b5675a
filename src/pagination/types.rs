//! Pagination types and traits
//!
//! Defines the cursor-drain abstractions shared by the paginated listing
//! endpoints.

use crate::error::{Error, Result};
use crate::types::Snowflake;

/// The largest page the service returns per request, fixed by the remote
/// API. Requests for more are clamped server-side; a page smaller than
/// this means the listing is exhausted.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// A record that carries the snowflake a cursor resumes after.
///
/// Paginated listings are ordered by identifier; the cursor for the next
/// page is the identifier of the last record received.
pub trait Cursored {
    /// The identifier pagination advances past
    fn cursor(&self) -> Snowflake;
}

/// Outcome of draining a paginated listing.
///
/// A drain that fails mid-way keeps everything fetched before the failing
/// page, so callers can observe how far pagination got. Check [`error`]
/// (or use [`into_result`]) before treating [`records`] as the complete
/// listing.
///
/// [`error`]: Drained::error
/// [`records`]: Drained::records
/// [`into_result`]: Drained::into_result
#[derive(Debug)]
pub struct Drained<T> {
    /// Records accumulated across pages, in returned order
    pub records: Vec<T>,
    /// The error that stopped the drain, if it did not run to completion
    pub error: Option<Error>,
}

impl<T> Drained<T> {
    /// A drain that ran to completion
    pub fn complete(records: Vec<T>) -> Self {
        Self {
            records,
            error: None,
        }
    }

    /// A drain aborted by a page failure, keeping the partial records
    pub fn aborted(records: Vec<T>, error: Error) -> Self {
        Self {
            records,
            error: Some(error),
        }
    }

    /// Whether the drain ran to completion
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Number of records accumulated
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were accumulated
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Convert into a plain `Result`, discarding partial records on error
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.error {
            None => Ok(self.records),
            Some(error) => Err(error),
        }
    }
}

impl<T> IntoIterator for Drained<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
