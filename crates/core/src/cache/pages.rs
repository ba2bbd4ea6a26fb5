//! Page record operations.
//!
//! Implements [`PersistenceStore`] over the `pages` table. Every statement
//! binds its values as parameters and every write runs in a transaction.

use super::connection::CacheDb;
use super::migrations;
use crate::store::PersistenceStore;
use crate::{CacheRecord, Error};
use async_trait::async_trait;
use tokio_rusqlite::params;
use tokio_rusqlite::rusqlite;

/// Raw row as stored; `content` is nullable in the schema.
struct PageRow {
    expires_at: i64,
    content: Option<String>,
}

fn select_page(conn: &rusqlite::Connection, key: &str) -> rusqlite::Result<Option<PageRow>> {
    let mut stmt = conn.prepare("SELECT key, content, expires_at FROM pages WHERE key = ?1")?;

    let result = stmt.query_row(params![key], |row| Ok(PageRow { content: row.get(1)?, expires_at: row.get(2)? }));

    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

#[async_trait]
impl PersistenceStore for CacheDb {
    /// Get a page by key.
    ///
    /// On a store that has never been bootstrapped the first query fails
    /// with "no such table"; the schema is created and the query retried
    /// once. Any other failure propagates.
    async fn lookup(&self, key: &str) -> Result<Option<CacheRecord>, Error> {
        let key = key.to_string();
        self.conn
            .call(move |conn| -> Result<Option<CacheRecord>, Error> {
                let row = match select_page(conn, &key) {
                    Err(e) if migrations::is_missing_table(&e) => {
                        tracing::info!("cache schema missing, bootstrapping");
                        migrations::apply(conn)?;
                        select_page(conn, &key)?
                    }
                    other => other?,
                };

                match row {
                    None => Ok(None),
                    Some(PageRow { content: None, .. }) => Err(Error::MissingContent(key)),
                    Some(PageRow { content: Some(content), expires_at }) => {
                        Ok(Some(CacheRecord { key, expires_at, content }))
                    }
                }
            })
            .await
            .map_err(Error::from)
    }

    async fn insert(&self, record: &CacheRecord) -> Result<(), Error> {
        let record = record.clone();
        self.conn
            .call(move |conn| -> Result<(), Error> {
                let tx = conn.transaction()?;
                tx.execute(
                    "INSERT INTO pages (key, content, expires_at) VALUES (?1, ?2, ?3)",
                    params![record.key, record.content, record.expires_at],
                )?;
                tx.commit()?;
                Ok(())
            })
            .await
            .map_err(Error::from)
    }

    async fn update(&self, record: &CacheRecord) -> Result<(), Error> {
        let record = record.clone();
        self.conn
            .call(move |conn| -> Result<(), Error> {
                let tx = conn.transaction()?;
                let changed = tx.execute(
                    "UPDATE pages SET content = ?1, expires_at = ?2 WHERE key = ?3",
                    params![record.content, record.expires_at, record.key],
                )?;
                if changed == 0 {
                    return Err(Error::RecordNotFound(record.key));
                }
                tx.commit()?;
                Ok(())
            })
            .await
            .map_err(Error::from)
    }
}
