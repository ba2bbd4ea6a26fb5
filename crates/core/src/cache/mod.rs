//! SQLite-backed page cache.
//!
//! This module provides persistent storage for fetched pages using SQLite
//! with async access via tokio-rusqlite. It supports:
//!
//! - Lazy schema bootstrap on first lookup
//! - Versioned, idempotent migrations
//! - Parameter-bound statements and transactional writes
//! - WAL mode

pub mod connection;
pub mod migrations;
pub mod pages;

pub use crate::Error;

pub use connection::CacheDb;
