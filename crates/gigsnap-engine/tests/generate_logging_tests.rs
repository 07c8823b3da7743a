mod common;

use common::sample_catalog;
use gigsnap_core::errors::FetchError;
use gigsnap_core::logging_facility::init_test_capture;
use gigsnap_core::Resource;
use gigsnap_core_types::schema::{
    EVENT_DEGRADED, EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ARTIST_ID, FIELD_ERR_CODE,
};
use gigsnap_engine::{generate, GenerateConfig};

#[test]
fn test_generate_logs_lifecycle_and_degradations() {
    let capture = init_test_capture();

    generate(&sample_catalog(), &GenerateConfig::default()).unwrap();

    capture.assert_event_exists("generate", EVENT_START);
    capture.assert_event_exists("generate", EVENT_END);

    let degraded_for_7 = capture.count_events(|e| {
        e.op.as_deref() == Some("generate")
            && e.event.as_deref() == Some(EVENT_DEGRADED)
            && e.field(FIELD_ARTIST_ID) == Some("7")
            && e.field(FIELD_ERR_CODE) == Some("ERR_EXTERNAL_SERVICE")
    });
    assert!(degraded_for_7 >= 1, "expected a degraded event for artist 7");
}

#[test]
fn test_generate_logs_fatal_error() {
    let capture = init_test_capture();
    let catalog = sample_catalog().with_failure(
        Resource::Dates,
        FetchError::Status {
            resource: Resource::Dates,
            status: 502,
        },
    );

    generate(&catalog, &GenerateConfig::default()).unwrap_err();

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("generate")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field("error").is_some_and(|m| m.contains("dates"))
    });
    assert!(errors >= 1);
}
