//! SQLite storage module
//!
//! A single connection behind a mutex gives every concurrently-dispatched
//! worker an independently transactional view of the store: each window
//! replacement takes the lock for exactly one transaction, so interleaving
//! across symbols is safe without any further locking.

pub mod models;
mod intraday;
mod migrations;

use crate::error::Result;
use models::{Interval, IntradayRecord};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;

/// Intraday store wrapper
pub struct IntradayDb {
    conn: Mutex<Connection>,
}

impl IntradayDb {
    /// Open (or create) the store at `path` and bring the schema up to date.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for better concurrent access
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Open an in-memory store, schema included.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.run_migrations()?;

        Ok(db)
    }

    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn.lock();
        migrations::run_migrations(&conn)
    }

    /// Replace the stored window covered by one page of records.
    ///
    /// See [`intraday::replace_window`] for the transaction contract.
    pub fn replace_window(
        &self,
        interval: Interval,
        symbol: &str,
        records: &[IntradayRecord],
    ) -> Result<()> {
        let mut conn = self.conn.lock();
        intraday::replace_window(&mut conn, interval, symbol, records)
    }

    /// Stored rows for one symbol within an inclusive date span, ascending.
    pub fn query_window(
        &self,
        interval: Interval,
        symbol: &str,
        date_from: &str,
        date_to: &str,
    ) -> Result<Vec<IntradayRecord>> {
        let conn = self.conn.lock();
        intraday::query_window(&conn, interval, symbol, date_from, date_to)
    }
}
