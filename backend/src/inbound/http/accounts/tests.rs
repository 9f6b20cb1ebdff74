//! Handler tests for signup and signin.

use std::sync::Arc;

use super::*;
use crate::domain::ports::MockAuthenticationService;
use crate::domain::{
    AUTHENTICATION_FAILED_MESSAGE, Email, STORE_UNAVAILABLE_MESSAGE, SignupValidationError, UserId,
    UserName,
};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn ana() -> User {
    User::new(
        UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id"),
        UserName::new("Ana Silva").expect("valid name"),
        Email::new("ana@x.com").expect("valid email"),
        true,
    )
}

fn test_app(
    auth: MockAuthenticationService,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(auth));
    App::new()
        .app_data(web::Data::new(state))
        .service(web::scope("/api/v1").service(signup).service(signin))
}

async fn post_json(auth: MockAuthenticationService, uri: &str, body: Value) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(auth)).await;
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(&body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&bytes).expect("JSON body");
    (status, value)
}

#[rstest]
#[actix_web::test]
async fn signup_returns_created_user(ana: User) {
    let mut auth = MockAuthenticationService::new();
    auth.expect_signup()
        .withf(|request| {
            request.name == "Ana Silva"
                && request.email == "ana@x.com"
                && request.password.as_str() == "s3nha!"
                && request.account_type.as_deref() == Some("owner")
                && request.company_id.is_none()
        })
        .times(1)
        .return_once(move |_| Ok(ana));

    let (status, body) = post_json(
        auth,
        "/api/v1/signup",
        json!({
            "name": "Ana Silva",
            "email": "ana@x.com",
            "password": "s3nha!",
            "accountType": "owner"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "name": "Ana Silva",
            "email": "ana@x.com",
            "isOwner": true
        })
    );
}

#[rstest]
#[case(json!({"accountType": "employee", "companyId": "c-1"}))]
#[case(json!({"type_account": "employee", "company_id": "c-1"}))]
#[actix_web::test]
async fn signup_accepts_both_field_spellings(#[case] extra: Value, ana: User) {
    let mut auth = MockAuthenticationService::new();
    auth.expect_signup()
        .withf(|request| {
            request.account_type.as_deref() == Some("employee")
                && request.company_id.as_deref() == Some("c-1")
        })
        .times(1)
        .return_once(move |_| Ok(ana));

    let mut body = json!({"name": "Bea", "email": "bea@x.com", "password": "pw"});
    if let (Some(target), Some(fields)) = (body.as_object_mut(), extra.as_object()) {
        target.extend(fields.clone());
    }

    let (status, _) = post_json(auth, "/api/v1/signup", body).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[rstest]
#[actix_web::test]
async fn signup_missing_fields_reach_domain_as_empty() {
    let mut auth = MockAuthenticationService::new();
    auth.expect_signup()
        .withf(|request| request.name.is_empty() && request.account_type.is_none())
        .times(1)
        .return_once(|_| Err(Error::rejected(&SignupValidationError::NameRequired)));

    let (status, body) = post_json(auth, "/api/v1/signup", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "name is required");
    assert_eq!(body["details"]["field"], "name");
}

#[rstest]
#[actix_web::test]
async fn signin_returns_user(ana: User) {
    let mut auth = MockAuthenticationService::new();
    auth.expect_signin()
        .withf(|credentials| {
            credentials.email() == "ana@x.com" && credentials.password() == "s3nha!"
        })
        .times(1)
        .return_once(move |_| Ok(ana));

    let (status, body) = post_json(
        auth,
        "/api/v1/signin",
        json!({"email": "ana@x.com", "password": "s3nha!"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isOwner"], true);
    assert!(body.get("passwordHash").is_none());
}

#[rstest]
#[actix_web::test]
async fn signin_failure_is_unauthorized() {
    let mut auth = MockAuthenticationService::new();
    auth.expect_signin()
        .times(1)
        .return_once(|_| Err(Error::authentication_failed()));

    let (status, body) = post_json(
        auth,
        "/api/v1/signin",
        json!({"email": "ana@x.com", "password": "wrong"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "unauthorized");
    assert_eq!(body["message"], AUTHENTICATION_FAILED_MESSAGE);
}

#[rstest]
#[actix_web::test]
async fn store_outage_is_service_unavailable() {
    let mut auth = MockAuthenticationService::new();
    auth.expect_signin()
        .return_once(|_| Err(Error::store_unavailable()));

    let (status, body) = post_json(
        auth,
        "/api/v1/signin",
        json!({"email": "ana@x.com", "password": "pw"}),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({"code": "service_unavailable", "message": STORE_UNAVAILABLE_MESSAGE})
    );
}
