//! Cursor drain implementation
//!
//! The listing endpoints page by identifier: each request names the
//! snowflake to resume after and a page size, and the service answers
//! with records ordered ascending by identifier. The helpers here turn
//! that page-at-a-time primitive into a whole-listing fetch.

use super::types::{Cursored, Drained, MAX_PAGE_SIZE};
use crate::error::Result;
use crate::types::Snowflake;
use futures::{Stream, StreamExt};
use std::future::Future;

struct DrainState<F> {
    after: Snowflake,
    remaining: u32,
    unlimited: bool,
    done: bool,
    fetch_page: F,
}

/// Lazily walk a paginated listing, yielding one page per item.
///
/// `after` is the cursor to resume past (zero for the beginning); `limit`
/// caps the total records requested, with `0` meaning "everything
/// available". `fetch_page` is invoked with a cursor and a page size and
/// is expected to return at most that many records.
///
/// Pages are requested strictly sequentially: each request depends on the
/// identifier of the previous page's last record. The stream ends after
/// the first page smaller than [`MAX_PAGE_SIZE`] (the source is dry),
/// after the limit is consumed, or after yielding a fetch error. A
/// listing whose size is an exact multiple of [`MAX_PAGE_SIZE`] costs one
/// final empty page before the stream ends.
pub fn page_stream<T, F, Fut>(
    after: Snowflake,
    limit: u32,
    fetch_page: F,
) -> impl Stream<Item = Result<Vec<T>>>
where
    T: Cursored,
    F: FnMut(Snowflake, u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let state = DrainState {
        after,
        remaining: limit,
        unlimited: limit == 0,
        done: false,
        fetch_page,
    };

    futures::stream::unfold(state, |mut state| async move {
        if state.done || (!state.unlimited && state.remaining == 0) {
            return None;
        }

        let mut size = MAX_PAGE_SIZE;
        if !state.unlimited {
            size = size.min(state.remaining);
            state.remaining -= size;
        }

        let page = match (state.fetch_page)(state.after, size).await {
            Ok(page) => page,
            Err(err) => {
                state.done = true;
                return Some((Err(err), state));
            }
        };

        // A page below the service ceiling means the source is dry, even
        // when the requested limit is not yet consumed.
        if (page.len() as u32) < MAX_PAGE_SIZE {
            state.done = true;
        }

        if let Some(last) = page.last() {
            state.after = last.cursor();
        }

        Some((Ok(page), state))
    })
}

/// Drain a paginated listing into a single sequence.
///
/// Same cursor and limit semantics as [`page_stream`]. A page failure
/// aborts the drain immediately (no retry happens at this layer) and the
/// records accumulated before the failure are preserved in the returned
/// [`Drained`] alongside the error.
pub async fn drain_after<T, F, Fut>(after: Snowflake, limit: u32, fetch_page: F) -> Drained<T>
where
    T: Cursored,
    F: FnMut(Snowflake, u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let stream = page_stream(after, limit, fetch_page);
    futures::pin_mut!(stream);

    let mut records = Vec::new();
    while let Some(page) = stream.next().await {
        match page {
            Ok(page) => records.extend(page),
            Err(err) => return Drained::aborted(records, err),
        }
    }

    Drained::complete(records)
}
