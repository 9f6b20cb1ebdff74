//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Provides the Diesel-backed [`DieselIdentityStore`] together with its
//! connection pool and embedded migrations. Connections are async through
//! `diesel-async` and pooled with `bb8`.
//!
//! # Architecture
//!
//! - **Thin adapters**: the store only translates between Diesel rows and
//!   domain types. Signup rules live in the domain service.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: Diesel and pool failures are mapped onto
//!   `IdentityStoreError` variants.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselIdentityStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/accounts")).await?;
//! let store = DieselIdentityStore::new(pool);
//! ```

mod diesel_identity_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_identity_store::DieselIdentityStore;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
