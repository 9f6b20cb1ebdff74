//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the signup/signin endpoints, the health probes, and
//! the `User` and `Error` payload schemas. The document backs Swagger UI in
//! debug builds and is exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, FieldError, User};
use crate::inbound::http::accounts::{SigninRequestBody, SignupRequestBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts backend API",
        description = "Owner and employee signup, email/password signin, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::signup,
        crate::inbound::http::accounts::signin,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Error,
        ErrorCode,
        FieldError,
        SignupRequestBody,
        SigninRequestBody
    )),
    tags(
        (name = "accounts", description = "Account registration and authentication"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
