//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed identity store using Diesel ORM
//! - **memory**: in-process identity store for local runs and tests
//! - **credentials**: Argon2id password hashing
//!
//! Adapters are thin translators between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod credentials;
pub mod memory;
pub mod persistence;

pub use credentials::Argon2CredentialHasher;
pub use memory::InMemoryIdentityStore;
