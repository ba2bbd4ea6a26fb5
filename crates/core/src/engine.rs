//! Read-through TTL cache engine.
//!
//! A read consults the store and ends in exactly one of three outcomes:
//!
//! - **Miss**: no record; fetch, insert with `now + ttl`.
//! - **Refresh**: record expired (`expires_at < now`); fetch, update with `now + ttl`.
//! - **Hit**: record fresh; return stored content, no fetch and no write.
//!
//! The engine keeps no state between reads and performs no recovery:
//! fetcher and store failures reach the caller unchanged.

use std::time::Duration;

use crate::clock::Clock;
use crate::fetcher::ContentFetcher;
use crate::store::PersistenceStore;
use crate::{CacheOutcome, CacheRecord, CacheStatus, Error};

/// TTL used when none is configured.
pub const DEFAULT_TTL: Duration = Duration::from_secs(45 * 60);

/// Decision core composing a store, a fetcher and a clock.
pub struct CacheEngine<S, F, C> {
    store: S,
    fetcher: F,
    clock: C,
    ttl: Duration,
}

impl<S, F, C> CacheEngine<S, F, C>
where
    S: PersistenceStore,
    F: ContentFetcher,
    C: Clock,
{
    pub fn new(store: S, fetcher: F, clock: C, ttl: Duration) -> Self {
        Self { store, fetcher, clock, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Return content for `key`, fetching and persisting it when absent or stale.
    pub async fn read(&self, key: &str) -> Result<CacheOutcome, Error> {
        match self.store.lookup(key).await? {
            None => {
                let record = self.fetch_record(key).await?;
                self.store.insert(&record).await?;
                tracing::debug!(key, expires_at = record.expires_at, "cache miss");
                Ok(CacheOutcome::new(CacheStatus::Miss, record.content))
            }
            Some(stored) if stored.is_stale_at(self.clock.now().timestamp()) => {
                let record = self.fetch_record(key).await?;
                self.store.update(&record).await?;
                tracing::debug!(
                    key,
                    previous_expires_at = stored.expires_at,
                    expires_at = record.expires_at,
                    "cache refresh"
                );
                Ok(CacheOutcome::new(CacheStatus::Refresh, record.content))
            }
            Some(stored) => {
                tracing::debug!(key, expires_at = stored.expires_at, "cache hit");
                Ok(CacheOutcome::new(CacheStatus::Hit, stored.content))
            }
        }
    }

    async fn fetch_record(&self, key: &str) -> Result<CacheRecord, Error> {
        let content = self.fetcher.fetch(key).await?;
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let expires_at = self.clock.now().timestamp().saturating_add(ttl_secs);
        Ok(CacheRecord::new(key, expires_at, content))
    }
}
