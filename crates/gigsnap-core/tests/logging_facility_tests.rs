#![allow(clippy::unwrap_used, clippy::expect_used)]

use gigsnap_core::errors::{FetchError, GigsnapError};
use gigsnap_core::logging_facility::test_capture::init_test_capture;
use gigsnap_core::{log_op_degraded, log_op_end, log_op_error, log_op_start, Resource};
use gigsnap_core_types::schema::{EVENT_DEGRADED, EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, variant = "static-data");

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = GigsnapError::FatalFetch {
        source: FetchError::Status {
            resource: Resource::Dates,
            status: 500,
        },
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1);
    assert_eq!(
        error_events[0].field("err_code"),
        Some("ERR_EXTERNAL_SERVICE")
    );
}

#[test]
fn test_log_op_degraded_is_warning_with_artist() {
    let capture = init_test_capture();
    let op_name = "test_log_op_degraded_unique_4";

    let err = GigsnapError::PartialFetch {
        artist_id: 7,
        source: FetchError::Transport {
            resource: Resource::Relation(7),
            message: "timed out".to_string(),
        },
    };
    log_op_degraded!(op_name, &err, artist_id = 7u32);

    let degraded: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_DEGRADED))
        .collect();

    assert_eq!(degraded.len(), 1);
    assert_eq!(degraded[0].level, tracing::Level::WARN);
    assert_eq!(degraded[0].field("artist_id"), Some("7"));
}
