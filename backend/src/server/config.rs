//! Server settings loaded via OrthoConfig, and the resolved server config.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use backend::outbound::persistence::{DbPool, PoolConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings read from `ACCOUNTS_*` environment variables, configuration
/// files and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACCOUNTS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// PostgreSQL connection URL. The in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl ServerSettings {
    /// Parse the bind address. Defaults to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_str();
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool settings for the configured database, if any.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url().map(|url| {
            PoolConfig::new(url).with_max_size(
                self.db_max_connections
                    .unwrap_or(PoolConfig::DEFAULT_MAX_SIZE),
            )
        })
    }
}

/// Backing store selected at startup.
pub enum IdentityBackend {
    /// Diesel store over a PostgreSQL pool.
    Postgres(DbPool),
    /// Process-local store; data is lost on restart.
    InMemory,
}

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) backend: IdentityBackend,
}

impl ServerConfig {
    /// Serve on `bind_addr` using the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            backend: IdentityBackend::InMemory,
        }
    }

    /// Attach a database connection pool for the Diesel identity store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.backend = IdentityBackend::Postgres(pool);
        self
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("accounts-server")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("ACCOUNTS_BIND_ADDR", None::<String>),
            ("ACCOUNTS_DATABASE_URL", None::<String>),
            ("ACCOUNTS_DB_MAX_CONNECTIONS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("valid literal")
        );
        assert!(settings.database_url().is_none());
        assert!(settings.pool_config().is_none());
        assert!(settings.db_max_connections.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ACCOUNTS_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "ACCOUNTS_DATABASE_URL",
                Some("postgres://localhost/accounts".to_owned()),
            ),
            ("ACCOUNTS_DB_MAX_CONNECTIONS", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("override parses").port(),
            9000
        );
        let pool = settings.pool_config().expect("database configured");
        assert_eq!(pool.database_url(), "postgres://localhost/accounts");
        assert_eq!(pool.max_size(), 4);
    }

    #[rstest]
    fn blank_database_url_selects_memory_store() {
        let _guard = lock_env([
            ("ACCOUNTS_BIND_ADDR", None::<String>),
            ("ACCOUNTS_DATABASE_URL", Some("  ".to_owned())),
            ("ACCOUNTS_DB_MAX_CONNECTIONS", None::<String>),
        ]);

        assert!(load_from_empty_args().pool_config().is_none());
    }

    #[rstest]
    fn malformed_bind_addr_is_rejected() {
        let settings = ServerSettings {
            bind_addr: "not-an-address".to_owned(),
            database_url: None,
            db_max_connections: None,
        };

        let err = settings.bind_addr().expect_err("invalid address");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
