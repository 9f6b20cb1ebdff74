//! Tests for the use-case error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(SignupValidationError::NameRequired, "name is required", "name", "name_required")]
#[case(
    SignupValidationError::EmailAlreadyRegistered,
    "email already registered",
    "email",
    "email_already_registered"
)]
#[case(
    SignupValidationError::CompanyIdRequired,
    "company id is required for employee signup",
    "companyId",
    "company_id_required"
)]
fn rejected_signups_name_the_rule(
    #[case] rule: SignupValidationError,
    #[case] message: &str,
    #[case] field: &str,
    #[case] code: &str,
) {
    let err = Error::rejected(&rule);

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), message);
    let details = err.details().expect("rejections carry details");
    assert_eq!(details.field, field);
    assert_eq!(details.code, code);
}

#[rstest]
#[case(Error::authentication_failed(), ErrorCode::Unauthorized, AUTHENTICATION_FAILED_MESSAGE)]
#[case(Error::store_unavailable(), ErrorCode::ServiceUnavailable, STORE_UNAVAILABLE_MESSAGE)]
#[case(Error::internal(), ErrorCode::InternalError, INTERNAL_ERROR_MESSAGE)]
fn infrastructure_and_auth_errors_use_fixed_text(
    #[case] err: Error,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    assert_eq!(err.code(), code);
    assert_eq!(err.message(), message);
    assert!(err.details().is_none());
}

#[rstest]
fn serialises_code_in_snake_case_with_details() {
    let value = serde_json::to_value(Error::rejected(&SignupValidationError::CompanyNotFound))
        .expect("serialise error");

    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "company not found",
            "details": { "field": "companyId", "code": "company_not_found" },
        })
    );
}

#[rstest]
fn serialisation_omits_missing_details() {
    let value = serde_json::to_value(Error::authentication_failed()).expect("serialise error");

    assert_eq!(
        value,
        json!({ "code": "unauthorized", "message": "Email e/ou senha incorretos" })
    );
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::store_unavailable().to_string(), "identity store unavailable");
}
