//! Persistence abstraction for cache records.
//!
//! The store owns record storage and lifetime. Implementations must bind
//! every record field as an opaque value and make each write atomic: a
//! failed `insert` or `update` leaves no partial record behind.

use async_trait::async_trait;

use crate::{CacheRecord, Error};

#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Look up the record for `key`. Absence is `Ok(None)`, not an error.
    async fn lookup(&self, key: &str) -> Result<Option<CacheRecord>, Error>;

    /// Add a record for a key that does not exist yet.
    async fn insert(&self, record: &CacheRecord) -> Result<(), Error>;

    /// Overwrite content and expiration of an existing record.
    ///
    /// Fails with [`Error::RecordNotFound`] when no row matches the key.
    async fn update(&self, record: &CacheRecord) -> Result<(), Error>;
}
