//! Driving port for signup/signin use-cases.
//!
//! Inbound adapters call this port without knowing the backing store or the
//! hashing scheme, so handler tests can substitute a double.

use async_trait::async_trait;

use crate::domain::{Error, SigninCredentials, SignupRequest, User};

/// Domain use-case port for account registration and authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationService: Send + Sync {
    /// Register a new owner or employee and return the created user.
    async fn signup(&self, request: SignupRequest) -> Result<User, Error>;

    /// Authenticate an email/password pair and return the matching user.
    async fn signin(&self, credentials: &SigninCredentials) -> Result<User, Error>;
}
