//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed identity entities used by the HTTP and
//! persistence layers, and the account service that enforces signup and
//! signin rules. Types are immutable once constructed; invariants are
//! documented on each type.
//!
//! Public surface:
//! - Error, ErrorCode: use-case failure payload.
//! - User, Enterprise, Employee: identity records.
//! - SignupRequest, SigninCredentials: use-case inputs.
//! - AccountsService: implementation of the authentication driving port.

pub mod accounts_service;
pub mod auth;
pub mod enterprise;
pub mod error;
pub mod group;
pub mod identifiers;
pub mod ports;
pub mod user;

pub use self::accounts_service::AccountsService;
pub use self::auth::{
    AccountType, SigninCredentials, SignupAccount, SignupRequest, SignupValidationError,
    ValidatedSignup,
};
pub use self::enterprise::{Employee, Enterprise};
pub use self::error::{
    AUTHENTICATION_FAILED_MESSAGE, Error, ErrorCode, FieldError, INTERNAL_ERROR_MESSAGE,
    STORE_UNAVAILABLE_MESSAGE,
};
pub use self::group::{Group, GroupPermission, UserGroup};
pub use self::identifiers::{
    EmployeeId, EnterpriseId, GroupId, GroupPermissionId, IdentifierValidationError, UserGroupId,
    UserId,
};
pub use self::user::{Email, PasswordHash, User, UserAccount, UserName, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::authentication_failed())
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
