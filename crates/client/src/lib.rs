//! Client code for pagecache.
//!
//! This crate provides the HTTP fetch pipeline that fills the cache and the
//! URL canonicalization that turns user input into cache keys.

pub mod fetch;

pub use fetch::{FetchClient, FetchConfig, FetchResponse, UrlError, canonicalize};
