//! Cached records and read outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One cached resource.
///
/// The key is the canonical resource address and never changes once the
/// record exists; content and expiration are rewritten on refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    pub key: String,
    /// Epoch seconds after which the record is stale.
    pub expires_at: i64,
    pub content: String,
}

impl CacheRecord {
    pub fn new(key: impl Into<String>, expires_at: i64, content: impl Into<String>) -> Self {
        Self { key: key.into(), expires_at, content: content.into() }
    }

    /// Whether the record has expired relative to `now` (epoch seconds).
    ///
    /// A record expiring exactly at `now` is still fresh.
    pub fn is_stale_at(&self, now: i64) -> bool {
        self.expires_at < now
    }
}

/// How a read was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheStatus {
    /// No record existed; content was fetched and inserted.
    Miss,
    /// A fresh record was returned without fetching.
    Hit,
    /// A stale record was refetched and updated.
    Refresh,
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CacheStatus::Miss => "CACHE MISS",
            CacheStatus::Hit => "CACHE HIT",
            CacheStatus::Refresh => "CACHE REFRESH",
        };
        f.write_str(label)
    }
}

/// Result of a single engine read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheOutcome {
    pub status: CacheStatus,
    pub content: String,
}

impl CacheOutcome {
    pub fn new(status: CacheStatus, content: impl Into<String>) -> Self {
        Self { status, content: content.into() }
    }
}
