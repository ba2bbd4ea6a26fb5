//! pagecache entry point.
//!
//! Reads one resource through the cache and prints its content followed by
//! the cache status line. Logging goes to stderr so stdout carries only the
//! result.

use anyhow::Result;
use clap::Parser;
use pagecache_client::{FetchClient, FetchConfig, canonicalize};
use pagecache_core::{CacheDb, CacheEngine, SystemClock};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let key = canonicalize(&cli.address, cli.port)?;

    tracing::info!(%key, ttl_minutes = config.ttl_minutes, db = %config.db_path.display(), "reading through cache");

    let store = CacheDb::open(&config.db_path).await?;
    let fetcher = FetchClient::new(FetchConfig::from(&config))?;
    let engine = CacheEngine::new(store, fetcher, SystemClock, config.ttl());

    let outcome = engine.read(key.as_str()).await?;

    println!("{}", outcome.content);
    println!("{}", outcome.status);

    Ok(())
}
