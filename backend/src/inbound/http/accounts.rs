//! Account API handlers.
//!
//! ```text
//! POST /api/v1/signup {"name":"Ana Silva","email":"ana@x.com","password":"s3nha!","accountType":"owner"}
//! POST /api/v1/signin {"email":"ana@x.com","password":"s3nha!"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, SigninCredentials, SignupRequest, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Signup request body for `POST /api/v1/signup`.
///
/// Missing fields deserialize as empty strings so the domain reports which
/// rule failed. `accountType` defaults to `owner`.
#[derive(Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequestBody {
    pub name: String,
    pub email: String,
    pub password: String,
    /// `owner` or `employee`.
    #[serde(alias = "type_account", alias = "account_type")]
    pub account_type: Option<String>,
    /// Enterprise id, required for employees.
    #[serde(alias = "company_id")]
    pub company_id: Option<String>,
}

impl From<SignupRequestBody> for SignupRequest {
    fn from(body: SignupRequestBody) -> Self {
        Self {
            account_type: body.account_type,
            company_id: body.company_id,
            ..Self::new(body.name, body.email, body.password)
        }
    }
}

/// Signin request body for `POST /api/v1/signin`.
#[derive(Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SigninRequestBody {
    pub email: String,
    pub password: String,
}

/// Register an owner or employee account.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupRequestBody,
    responses(
        (status = 201, description = "Account created", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Identity store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequestBody>,
) -> ApiResult<HttpResponse> {
    let user = state.auth.signup(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Authenticate an email/password pair.
#[utoipa::path(
    post,
    path = "/api/v1/signin",
    request_body = SigninRequestBody,
    responses(
        (status = 200, description = "Credentials accepted", body = User),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 503, description = "Identity store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "signin",
    security([])
)]
#[post("/signin")]
pub async fn signin(
    state: web::Data<HttpState>,
    payload: web::Json<SigninRequestBody>,
) -> ApiResult<web::Json<User>> {
    let SigninRequestBody { email, password } = payload.into_inner();
    let user = state
        .auth
        .signin(&SigninCredentials::new(email, password))
        .await?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests;
