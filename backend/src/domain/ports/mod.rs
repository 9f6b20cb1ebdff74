//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Each driven port exposes strongly typed errors so adapters map their
//! failures into predictable variants instead of returning `anyhow::Result`.

mod macros;
pub(crate) use macros::define_port_error;

mod authentication_service;
mod credential_hasher;
mod identity_store;

#[cfg(test)]
pub use authentication_service::MockAuthenticationService;
pub use authentication_service::AuthenticationService;
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHashError, CredentialHasher};
#[cfg(test)]
pub use identity_store::MockIdentityStore;
pub use identity_store::{AccountRegistration, IdentityStore, IdentityStoreError, Membership};
