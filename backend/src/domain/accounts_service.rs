//! Account registration and authentication service.
//!
//! Implements the [`AuthenticationService`] driving port on top of the
//! [`IdentityStore`] and [`CredentialHasher`] driven ports. All business
//! rules for signup and signin live here; adapters only persist and hash.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    AccountRegistration, AuthenticationService, CredentialHashError, CredentialHasher,
    IdentityStore, IdentityStoreError,
};
use crate::domain::{
    Email, Error, PasswordHash, SigninCredentials, SignupAccount, SignupRequest,
    SignupValidationError, User, ValidatedSignup,
};

/// Plaintext hashed once to give unknown-email signins a real hash to verify.
const TIMING_DECOY_PASSWORD: &str = "accounts-timing-decoy";

/// Signup/signin service implementing the driving port.
#[derive(Clone)]
pub struct AccountsService<S, H> {
    store: Arc<S>,
    hasher: Arc<H>,
    decoy_hash: Arc<OnceLock<PasswordHash>>,
}

impl<S, H> AccountsService<S, H> {
    /// Create a new service over the given store and hasher.
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self {
            store,
            hasher,
            decoy_hash: Arc::new(OnceLock::new()),
        }
    }
}

impl<S, H> AccountsService<S, H>
where
    S: IdentityStore,
    H: CredentialHasher,
{
    fn signup_rejected(error: &SignupValidationError) -> Error {
        debug!(field = error.field(), code = error.code(), "signup rejected");
        Error::rejected(error)
    }

    fn map_store_error(error: IdentityStoreError) -> Error {
        match error {
            IdentityStoreError::Connection { message } => {
                warn!(%message, "identity store unavailable");
                Error::store_unavailable()
            }
            IdentityStoreError::Query { message } => {
                warn!(%message, "identity store query failed");
                Error::internal()
            }
            IdentityStoreError::DuplicateEmail => {
                Self::signup_rejected(&SignupValidationError::EmailAlreadyRegistered)
            }
            IdentityStoreError::EnterpriseNotFound { .. } => {
                Self::signup_rejected(&SignupValidationError::CompanyNotFound)
            }
        }
    }

    fn map_hash_error(error: CredentialHashError) -> Error {
        warn!(error = %error, "credential hasher failed");
        Error::internal()
    }

    /// Spend one verification on a throwaway hash so unknown emails take as
    /// long as wrong passwords.
    fn verify_decoy(&self, password: &str) {
        let decoy = match self.decoy_hash.get() {
            Some(hash) => hash,
            None => match self.hasher.hash(TIMING_DECOY_PASSWORD) {
                Ok(hash) => self.decoy_hash.get_or_init(|| hash),
                Err(error) => {
                    warn!(error = %error, "decoy hash unavailable");
                    return;
                }
            },
        };
        if let Err(error) = self.hasher.verify(password, decoy) {
            warn!(error = %error, "decoy verification failed");
        }
    }

    /// Checks that need the store, run after the input-only checks.
    async fn ensure_registrable(&self, signup: &ValidatedSignup) -> Result<(), Error> {
        let taken = self
            .store
            .user_exists_with_email(signup.email())
            .await
            .map_err(Self::map_store_error)?;
        if taken {
            return Err(Self::signup_rejected(
                &SignupValidationError::EmailAlreadyRegistered,
            ));
        }

        if let SignupAccount::Employee { company_id } = signup.account() {
            let exists = self
                .store
                .enterprise_exists(&company_id)
                .await
                .map_err(Self::map_store_error)?;
            if !exists {
                return Err(Self::signup_rejected(&SignupValidationError::CompanyNotFound));
            }
        }

        Ok(())
    }

    fn plan_registration(&self, signup: ValidatedSignup) -> Result<AccountRegistration, Error> {
        let password_hash = self
            .hasher
            .hash(signup.password())
            .map_err(Self::map_hash_error)?;
        let name = signup.name().clone();
        let email = signup.email().clone();

        Ok(match signup.account() {
            SignupAccount::Owner => AccountRegistration::owner(name, email, password_hash),
            SignupAccount::Employee { company_id } => {
                AccountRegistration::employee(name, email, password_hash, company_id)
            }
        })
    }
}

#[async_trait]
impl<S, H> AuthenticationService for AccountsService<S, H>
where
    S: IdentityStore,
    H: CredentialHasher,
{
    async fn signup(&self, request: SignupRequest) -> Result<User, Error> {
        let signup = request
            .validate()
            .map_err(|err| Self::signup_rejected(&err))?;
        self.ensure_registrable(&signup).await?;

        let account_type = signup.account().account_type();
        let registration = self.plan_registration(signup)?;
        self.store
            .register_account(&registration)
            .await
            .map_err(Self::map_store_error)?;

        let user = registration.into_user();
        info!(user_id = %user.id(), %account_type, "user signed up");
        Ok(user)
    }

    async fn signin(&self, credentials: &SigninCredentials) -> Result<User, Error> {
        // An email that fails validation cannot belong to a stored user.
        let account = match Email::new(credentials.email()) {
            Ok(email) => self
                .store
                .find_user_by_email(&email)
                .await
                .map_err(Self::map_store_error)?,
            Err(_) => None,
        };
        let Some(account) = account else {
            debug!("signin rejected: unknown email");
            self.verify_decoy(credentials.password());
            return Err(Error::authentication_failed());
        };

        let verified = self
            .hasher
            .verify(credentials.password(), account.password_hash())
            .map_err(Self::map_hash_error)?;
        if !verified {
            debug!(user_id = %account.user().id(), "signin rejected: password mismatch");
            return Err(Error::authentication_failed());
        }

        Ok(account.into_user())
    }
}

#[cfg(test)]
#[path = "accounts_service_tests.rs"]
mod tests;
