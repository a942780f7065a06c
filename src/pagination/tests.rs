//! Tests for pagination module

use super::*;
use crate::error::Error;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Envelope Tests
// ============================================================================

#[test]
fn test_data_records() {
    let body = json!({"data": [{"guid": "a"}, {"guid": "b"}], "has_more": false});
    let records = data_records(&body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["guid"], "b");
}

#[test]
fn test_data_records_missing_or_wrong_type() {
    assert!(matches!(
        data_records(&json!({"has_more": false})).unwrap_err(),
        Error::MalformedResponse { .. }
    ));
    assert!(matches!(
        data_records(&json!({"data": {"guid": "a"}})).unwrap_err(),
        Error::MalformedResponse { .. }
    ));
}

#[test_case(json!({"has_more": true}), true ; "bool true")]
#[test_case(json!({"has_more": false}), false ; "bool false")]
#[test_case(json!({"has_more": 1}), true ; "number one")]
#[test_case(json!({"has_more": "true"}), true ; "string true")]
#[test_case(json!({"has_more": null}), false ; "null")]
#[test_case(json!({}), false ; "missing")]
fn test_has_more(body: serde_json::Value, expected: bool) {
    assert_eq!(has_more(&body), expected);
}

// ============================================================================
// NextPage / State Tests
// ============================================================================

#[test]
fn test_pagination_state_with_page() {
    let state = PaginationState::with_page(4);
    assert_eq!(state.page, 4);
    assert_eq!(state.pages_fetched, 0);
    assert_eq!(state.total_fetched, 0);
    assert!(!state.done);
}

// ============================================================================
// PageNumberPaginator Tests
// ============================================================================

#[test]
fn test_paginator_params() {
    let paginator = PageNumberPaginator::new(10);
    let state = paginator.start(3);
    assert_eq!(
        paginator.params(&state),
        vec![("num_page".to_string(), "3".to_string())]
    );
}

#[test]
fn test_paginator_start_page_zero_reads_as_one() {
    let paginator = PageNumberPaginator::new(10);
    assert_eq!(paginator.start(0).page, 1);
}

#[test]
fn test_paginator_walks_until_has_more_false() {
    let paginator = PageNumberPaginator::new(10);
    let mut state = paginator.start(1);

    let next = paginator
        .process_response(&json!({"data": [1, 2], "has_more": true}), 2, &mut state)
        .unwrap();
    assert_eq!(next, NextPage::Continue { page: 2 });

    let next = paginator
        .process_response(&json!({"data": [3], "has_more": false}), 1, &mut state)
        .unwrap();
    assert_eq!(next, NextPage::Done);

    assert!(state.done);
    assert_eq!(state.pages_fetched, 2);
    assert_eq!(state.total_fetched, 3);
}

#[test]
fn test_paginator_limit_exceeded() {
    let paginator = PageNumberPaginator::new(3);
    let mut state = paginator.start(1);
    let body = json!({"data": [], "has_more": true});

    assert!(paginator.process_response(&body, 0, &mut state).is_ok());
    assert!(paginator.process_response(&body, 0, &mut state).is_ok());
    let err = paginator.process_response(&body, 0, &mut state).unwrap_err();

    assert!(matches!(err, Error::PaginationLimitExceeded { max_pages: 3 }));
    assert!(state.done);
    assert_eq!(state.pages_fetched, 3);
}

#[test]
fn test_paginator_page_number_overflow() {
    let paginator = PageNumberPaginator::new(10);
    let mut state = paginator.start(u32::MAX);
    let body = json!({"data": [], "has_more": true});

    let err = paginator.process_response(&body, 0, &mut state).unwrap_err();

    assert!(matches!(err, Error::PaginationLimitExceeded { max_pages: 10 }));
    assert!(state.done);
    assert_eq!(state.page, u32::MAX);
}

#[test]
fn test_paginator_last_page_at_limit_is_ok() {
    let paginator = PageNumberPaginator::new(1);
    let mut state = paginator.start(1);

    let next = paginator
        .process_response(&json!({"data": [1], "has_more": false}), 1, &mut state)
        .unwrap();
    assert_eq!(next, NextPage::Done);
}
