//! Content retrieval abstraction.

use async_trait::async_trait;

use crate::Error;

/// Retrieves raw content for a resource address.
///
/// Implementations make a single attempt per call; the engine never retries.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, address: &str) -> Result<String, Error>;
}
