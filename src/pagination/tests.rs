//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::types::Snowflake;
use futures::StreamExt;
use std::cell::RefCell;
use test_case::test_case;

#[derive(Debug, Clone, PartialEq)]
struct Item(u64);

impl Cursored for Item {
    fn cursor(&self) -> Snowflake {
        Snowflake::new(self.0)
    }
}

/// A simulated listing of `total` records with identifiers `1..=total`,
/// answering like the real endpoint: ascending, strictly after the
/// cursor, at most `size` records.
fn page_of(total: u64, after: Snowflake, size: u32) -> Vec<Item> {
    (after.value() + 1..=total)
        .take(size as usize)
        .map(Item)
        .collect()
}

// ============================================================================
// drain_after
// ============================================================================

#[tokio::test]
async fn test_unlimited_single_page() {
    let requests = RefCell::new(Vec::new());

    let drained = drain_after(Snowflake::default(), 0, |after, size| {
        requests.borrow_mut().push(size);
        let page = page_of(3, after, size);
        async move { Ok::<_, Error>(page) }
    })
    .await;

    assert!(drained.is_complete());
    assert_eq!(drained.len(), 3);
    assert_eq!(*requests.borrow(), vec![1000]);
}

#[tokio::test]
async fn test_unlimited_multi_page() {
    let requests = RefCell::new(Vec::new());

    let drained = drain_after(Snowflake::default(), 0, |after, size| {
        requests.borrow_mut().push((after, size));
        let page = page_of(1500, after, size);
        async move { Ok::<_, Error>(page) }
    })
    .await;

    assert!(drained.is_complete());
    assert_eq!(drained.len(), 1500);
    // Two calls: the second resumes after the first page's last record
    assert_eq!(
        *requests.borrow(),
        vec![
            (Snowflake::default(), 1000),
            (Snowflake::new(1000), 1000),
        ]
    );

    // Ascending identifier order, no gaps
    let ids: Vec<u64> = drained.records.iter().map(|item| item.0).collect();
    assert_eq!(ids, (1..=1500).collect::<Vec<_>>());
}

#[test_case(1; "single record")]
#[test_case(50; "small page")]
#[test_case(999; "just under the ceiling")]
#[tokio::test]
async fn test_bounded_under_page_size(limit: u32) {
    let requests = RefCell::new(Vec::new());

    let drained = drain_after(Snowflake::default(), limit, |after, size| {
        requests.borrow_mut().push(size);
        let page = page_of(10_000, after, size);
        async move { Ok::<_, Error>(page) }
    })
    .await;

    // Exactly one page request, sized to the limit
    assert_eq!(*requests.borrow(), vec![limit]);
    assert_eq!(drained.len(), limit as usize);
}

#[tokio::test]
async fn test_bounded_spanning_pages() {
    let requests = RefCell::new(Vec::new());

    let drained = drain_after(Snowflake::default(), 1500, |after, size| {
        requests.borrow_mut().push(size);
        let page = page_of(2000, after, size);
        async move { Ok::<_, Error>(page) }
    })
    .await;

    assert!(drained.is_complete());
    assert_eq!(*requests.borrow(), vec![1000, 500]);
    // Stops at the limit without exhausting the source
    assert_eq!(drained.len(), 1500);
    assert_eq!(drained.records.last(), Some(&Item(1500)));
}

#[tokio::test]
async fn test_exact_page_boundary_costs_one_empty_round_trip() {
    let requests = RefCell::new(Vec::new());

    let drained = drain_after(Snowflake::default(), 0, |after, size| {
        requests.borrow_mut().push(size);
        let page = page_of(1000, after, size);
        async move { Ok::<_, Error>(page) }
    })
    .await;

    assert!(drained.is_complete());
    assert_eq!(drained.len(), 1000);
    // A full first page cannot prove the source is dry, so a second
    // (empty) request goes out before the drain stops.
    assert_eq!(*requests.borrow(), vec![1000, 1000]);
}

#[tokio::test]
async fn test_mid_pagination_failure_keeps_partial_records() {
    let calls = RefCell::new(0u32);

    let drained = drain_after(Snowflake::default(), 0, |after, size| {
        *calls.borrow_mut() += 1;
        let result = if *calls.borrow() == 1 {
            Ok(page_of(1500, after, size))
        } else {
            Err(Error::http_status(500, "boom"))
        };
        async move { result }
    })
    .await;

    assert!(!drained.is_complete());
    assert_eq!(drained.len(), 1000);
    assert!(matches!(
        drained.error,
        Some(Error::HttpStatus { status: 500, .. })
    ));
    assert_eq!(*calls.borrow(), 2);
}

#[tokio::test]
async fn test_failure_on_first_page_yields_empty_partial() {
    let drained = drain_after(Snowflake::default(), 0, |_after, _size| async {
        Err::<Vec<Item>, _>(Error::http_status(503, "down"))
    })
    .await;

    assert!(drained.is_empty());
    assert!(!drained.is_complete());
}

#[tokio::test]
async fn test_start_cursor_is_forwarded() {
    let requests = RefCell::new(Vec::new());
    let start = Snowflake::new(250);

    let drained = drain_after(start, 0, |after, size| {
        requests.borrow_mut().push(after);
        let page = page_of(300, after, size);
        async move { Ok::<_, Error>(page) }
    })
    .await;

    assert_eq!(*requests.borrow(), vec![start]);
    // Only records strictly after the start cursor
    assert_eq!(drained.records.first(), Some(&Item(251)));
    assert_eq!(drained.len(), 50);
}

// ============================================================================
// page_stream
// ============================================================================

#[tokio::test]
async fn test_page_stream_yields_pages() {
    let stream = page_stream(Snowflake::default(), 0, |after, size| {
        let page = page_of(1500, after, size);
        async move { Ok::<_, Error>(page) }
    });

    let pages: Vec<_> = stream.collect().await;
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].as_ref().unwrap().len(), 1000);
    assert_eq!(pages[1].as_ref().unwrap().len(), 500);
}

#[tokio::test]
async fn test_page_stream_respects_limit() {
    let stream = page_stream(Snowflake::default(), 1200, |after, size| {
        let page = page_of(10_000, after, size);
        async move { Ok::<_, Error>(page) }
    });

    let pages: Vec<_> = stream.collect().await;
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].as_ref().unwrap().len(), 1000);
    assert_eq!(pages[1].as_ref().unwrap().len(), 200);
}

#[tokio::test]
async fn test_page_stream_ends_after_error() {
    let calls = RefCell::new(0u32);

    let stream = page_stream(Snowflake::default(), 0, |after, size| {
        *calls.borrow_mut() += 1;
        let result = if *calls.borrow() == 1 {
            Ok(page_of(1500, after, size))
        } else {
            Err(Error::http_status(500, "boom"))
        };
        async move { result }
    });

    let pages: Vec<_> = stream.collect().await;
    assert_eq!(pages.len(), 2);
    assert!(pages[0].is_ok());
    assert!(pages[1].is_err());
}

// ============================================================================
// Drained
// ============================================================================

#[test]
fn test_drained_complete() {
    let drained = Drained::complete(vec![Item(1), Item(2)]);
    assert!(drained.is_complete());
    assert!(!drained.is_empty());
    assert_eq!(drained.len(), 2);
    assert_eq!(drained.into_result().unwrap(), vec![Item(1), Item(2)]);
}

#[test]
fn test_drained_aborted() {
    let drained = Drained::aborted(vec![Item(1)], Error::http_status(500, ""));
    assert!(!drained.is_complete());
    assert_eq!(drained.len(), 1);
    assert!(drained.into_result().is_err());
}

#[test]
fn test_drained_into_iterator() {
    let drained = Drained::complete(vec![Item(7), Item(9)]);
    let ids: Vec<u64> = drained.into_iter().map(|item| item.0).collect();
    assert_eq!(ids, vec![7, 9]);
}
