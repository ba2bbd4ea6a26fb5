//! Command-line argument parsing.
//!
//! Flags override values loaded from the environment and config file.

use std::path::PathBuf;

use clap::Parser;
use pagecache_core::{AppConfig, ConfigError};

/// Fetch a URL through a persistent TTL cache
#[derive(Parser, Debug)]
#[command(name = "pagecache")]
#[command(about = "Fetch a URL through a persistent TTL cache")]
#[command(version)]
pub struct Cli {
    /// Address of the resource to read (scheme defaults to https)
    #[arg(short = 'a', long = "address", value_name = "URL")]
    pub address: String,

    /// Port to connect on; defaults to 443 for https and 80 for http
    #[arg(short = 'p', long = "port", value_name = "PORT")]
    pub port: Option<u16>,

    /// Minutes a fetched page stays fresh (default: 45)
    #[arg(short = 't', long = "ttl", value_name = "MINUTES")]
    pub ttl: Option<u64>,

    /// Path to the SQLite cache database (default: data.db)
    #[arg(long = "db", value_name = "PATH")]
    pub db: Option<PathBuf>,
}

impl Cli {
    /// Load layered configuration, then apply flag overrides.
    pub fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        self.apply_overrides(AppConfig::load()?)
    }

    /// Apply flag overrides to `config` and re-validate.
    pub fn apply_overrides(&self, mut config: AppConfig) -> Result<AppConfig, ConfigError> {
        if let Some(ttl) = self.ttl {
            config.ttl_minutes = ttl;
        }
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }
        config.validate()?;
        Ok(config)
    }
}
