//! Backend entry-point: loads settings, applies migrations, and serves the
//! signup/signin REST endpoints.

mod server;

use std::ffi::OsString;
use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

/// Resolve settings from the environment, config files and `args`.
fn load_settings(args: Vec<OsString>) -> io::Result<ServerSettings> {
    ServerSettings::load_from_iter(args)
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings(std::env::args_os().collect())?;
    let mut config = ServerConfig::new(settings.bind_addr()?);

    if let Some(pool_config) = settings.pool_config() {
        let database_url = pool_config.database_url().to_owned();
        let applied = web::block(move || run_pending_migrations(&database_url))
            .await
            .map_err(io::Error::other)?
            .map_err(io::Error::other)?;
        info!(applied = applied.len(), "schema ready");

        let pool = DbPool::new(pool_config).await.map_err(io::Error::other)?;
        config = config.with_db_pool(pool);
    } else {
        warn!("ACCOUNTS_DATABASE_URL not set; using the in-memory identity store");
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
