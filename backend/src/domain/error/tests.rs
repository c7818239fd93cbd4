//! Tests for domain error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::invalid_request("bad")
}

#[rstest]
#[case(Error::invalid_request("x"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("x"), ErrorCode::Unauthorized)]
#[case(Error::forbidden("x"), ErrorCode::Forbidden)]
#[case(Error::not_found("x"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("x"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("x"), ErrorCode::InternalError)]
fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_substitutes_canonical_message_for_blank_input() {
    let error = Error::new(ErrorCode::Forbidden, "  ");
    assert_eq!(error.message(), "Forbidden");
}

#[rstest]
fn try_with_trace_id_rejects_blank_values(base_error: Error) {
    let result = base_error.try_with_trace_id(" ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_captured_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID literal");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_envelope(base_error: Error) {
    let value = serde_json::to_value(
        base_error
            .with_trace_id(TRACE_ID)
            .with_details(json!({ "field": "name" })),
    )
    .expect("error serialises");

    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "bad",
            "traceId": TRACE_ID,
            "details": { "field": "name" }
        })
    );
}

#[rstest]
fn deserialising_rejects_blank_message() {
    let result = serde_json::from_value::<Error>(json!({ "code": "forbidden", "message": " " }));
    assert!(result.is_err());
}

#[rstest]
fn deserialising_accepts_snake_case_trace_alias() {
    let error: Error = serde_json::from_value(json!({
        "code": "unauthorized",
        "message": "Unauthorized",
        "trace_id": TRACE_ID
    }))
    .expect("payload deserialises");
    assert_eq!(error.trace_id(), Some(TRACE_ID));
    assert_eq!(error.code(), ErrorCode::Unauthorized);
}
