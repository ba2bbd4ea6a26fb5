//! Core types and the cache engine for pagecache.
//!
//! This crate provides:
//! - The read-through TTL engine and its collaborator traits
//! - Cache store implementation with SQLite backend
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod record;
pub mod store;

pub use cache::CacheDb;
pub use clock::{Clock, SystemClock};
pub use config::{AppConfig, ConfigError};
pub use engine::{CacheEngine, DEFAULT_TTL};
pub use error::Error;
pub use fetcher::ContentFetcher;
pub use record::{CacheOutcome, CacheRecord, CacheStatus};
pub use store::PersistenceStore;
