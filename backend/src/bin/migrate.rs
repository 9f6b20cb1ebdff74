//! Apply pending identity schema migrations and exit.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;

use backend::outbound::persistence::run_pending_migrations;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

/// `accounts-migrate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "accounts-migrate",
    about = "Apply pending identity schema migrations",
    version
)]
struct CliArgs {
    /// Database connection URL.
    #[arg(
        long = "database-url",
        value_name = "url",
        env = "ACCOUNTS_DATABASE_URL"
    )]
    database_url: Option<String>,
}

fn resolve_database_url(args: CliArgs) -> io::Result<String> {
    args.database_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| {
            io::Error::other("database URL missing: pass --database-url or set ACCOUNTS_DATABASE_URL")
        })
}

fn main() -> io::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let database_url = resolve_database_url(args)?;
    let applied = run_pending_migrations(&database_url).map_err(io::Error::other)?;

    for version in &applied {
        println!("applied {version}");
    }
    if applied.is_empty() {
        println!("schema up to date");
    }
    Ok(())
}
