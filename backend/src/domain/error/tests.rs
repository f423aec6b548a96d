//! Tests for the domain error taxonomy.

use super::*;
use rstest::rstest;

#[rstest]
#[case(Error::unauthenticated("login required"), ErrorCode::Unauthenticated, 401)]
#[case(Error::bad_request("bad"), ErrorCode::BadRequest, 400)]
#[case(Error::not_found("missing"), ErrorCode::NotFound, 404)]
#[case(Error::internal("boom"), ErrorCode::Internal, 500)]
fn constructors_set_code_and_status(
    #[case] error: Error,
    #[case] code: ErrorCode,
    #[case] status: u16,
) {
    assert_eq!(error.code(), code);
    assert_eq!(error.status_code(), status);
}

#[rstest]
fn message_prefers_title() {
    let error = Error::not_found("no experiment found");
    assert_eq!(error.message(), "no experiment found");
    assert_eq!(error.to_string(), "no experiment found");
}

#[rstest]
#[case(ErrorCode::Unauthenticated, "Unauthorized")]
#[case(ErrorCode::BadRequest, "Bad Request")]
#[case(ErrorCode::NotFound, "Not Found")]
#[case(ErrorCode::Internal, "Internal Server Error")]
fn empty_title_falls_back_to_reason(#[case] code: ErrorCode, #[case] expected: &str) {
    let error = Error::new(code, "");
    assert_eq!(error.message(), expected);
}

#[rstest]
fn details_are_optional() {
    let plain = Error::bad_request("bad");
    assert!(plain.details().is_none());

    let detailed = plain.with_details("line 1 column 2");
    assert_eq!(detailed.details(), Some("line 1 column 2"));
    assert_eq!(detailed.title(), "bad");
}
