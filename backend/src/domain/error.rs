//! Errors returned by the signup and signin use-cases.
//!
//! Four categories reach callers: rejected signup input, failed
//! authentication, an unavailable identity store, and unexpected internal
//! failures. Only rejected input carries a rule-specific message; the other
//! categories use fixed texts so store and hasher diagnostics stay in the
//! logs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::SignupValidationError;

/// Message returned for every failed signin, whatever the cause.
pub const AUTHENTICATION_FAILED_MESSAGE: &str = "Email e/ou senha incorretos";
/// Message returned while the identity store cannot be reached.
pub const STORE_UNAVAILABLE_MESSAGE: &str = "identity store unavailable";
/// Message returned for failures the caller cannot act on.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Failure category, serialised in snake case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Signup input broke a validation or uniqueness rule.
    InvalidRequest,
    /// Signin credentials did not match a stored user.
    Unauthorized,
    /// The identity store could not be reached.
    ServiceUnavailable,
    /// Storage or hashing failed unexpectedly.
    InternalError,
}

/// The request field a rejected signup refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Request field name, e.g. `companyId`.
    #[schema(example = "email")]
    pub field: String,
    /// Rule identifier, e.g. `email_already_registered`.
    #[schema(example = "email_required")]
    pub code: String,
}

/// Error payload returned by [`crate::domain::ports::AuthenticationService`].
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode, SignupValidationError};
///
/// let err = Error::rejected(&SignupValidationError::CompanyNotFound);
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.message(), "company not found");
/// assert_eq!(err.details().map(|d| d.field.as_str()), Some("companyId"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct Error {
    #[schema(example = "invalid_request")]
    code: ErrorCode,
    #[schema(example = "email already registered")]
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<FieldError>,
}

impl Error {
    fn fixed(code: ErrorCode, message: &str) -> Self {
        Self {
            code,
            message: message.to_owned(),
            details: None,
        }
    }

    /// Signup input rejected by `rule`, naming the offending field.
    pub fn rejected(rule: &SignupValidationError) -> Self {
        Self {
            code: ErrorCode::InvalidRequest,
            message: rule.to_string(),
            details: Some(FieldError {
                field: rule.field().to_owned(),
                code: rule.code().to_owned(),
            }),
        }
    }

    /// Signin failure; identical for unknown emails and wrong passwords.
    pub fn authentication_failed() -> Self {
        Self::fixed(ErrorCode::Unauthorized, AUTHENTICATION_FAILED_MESSAGE)
    }

    /// The identity store is unreachable.
    pub fn store_unavailable() -> Self {
        Self::fixed(ErrorCode::ServiceUnavailable, STORE_UNAVAILABLE_MESSAGE)
    }

    /// Opaque internal failure.
    pub fn internal() -> Self {
        Self::fixed(ErrorCode::InternalError, INTERNAL_ERROR_MESSAGE)
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Caller-facing message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Offending field for rejected signups.
    pub fn details(&self) -> Option<&FieldError> {
        self.details.as_ref()
    }
}

#[cfg(test)]
mod tests;
