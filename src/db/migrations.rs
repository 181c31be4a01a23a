//! SQLite migrations

use crate::error::Result;
use rusqlite::Connection;

/// Run all migrations
pub fn run_migrations(conn: &Connection) -> Result<()> {
    // Migrations tracking table (name is the primary key)
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )?;

    run_migration(conn, "001_intraday_5min", CREATE_INTRADAY_5MIN)?;
    run_migration(conn, "002_intraday_1hour", CREATE_INTRADAY_1HOUR)?;
    run_migration(conn, "003_intraday_24hour", CREATE_INTRADAY_24HOUR)?;

    tracing::debug!("Migrations completed");
    Ok(())
}

fn run_migration(conn: &Connection, name: &str, sql: &str) -> Result<()> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM migrations WHERE name = ?1",
        [name],
        |row| row.get(0),
    )?;

    if !exists {
        tracing::info!("Running migration: {}", name);
        conn.execute_batch(sql)?;
        conn.execute("INSERT INTO migrations (name) VALUES (?1)", [name])?;
    }

    Ok(())
}

const CREATE_INTRADAY_5MIN: &str = r#"
CREATE TABLE IF NOT EXISTS intraday_5min (
    date TEXT NOT NULL,
    symbol TEXT NOT NULL,
    exchange TEXT NOT NULL,
    open REAL NOT NULL,
    high REAL NOT NULL,
    low REAL NOT NULL,
    close REAL NOT NULL,
    last REAL NOT NULL,
    volume REAL NOT NULL,
    PRIMARY KEY (symbol, date)
);

CREATE INDEX IF NOT EXISTS idx_intraday_5min_date ON intraday_5min(date);
"#;

const CREATE_INTRADAY_1HOUR: &str = r#"
CREATE TABLE IF NOT EXISTS intraday_1hour (
    date TEXT NOT NULL,
    symbol TEXT NOT NULL,
    exchange TEXT NOT NULL,
    open REAL NOT NULL,
    high REAL NOT NULL,
    low REAL NOT NULL,
    close REAL NOT NULL,
    last REAL NOT NULL,
    volume REAL NOT NULL,
    PRIMARY KEY (symbol, date)
);

CREATE INDEX IF NOT EXISTS idx_intraday_1hour_date ON intraday_1hour(date);
"#;

const CREATE_INTRADAY_24HOUR: &str = r#"
CREATE TABLE IF NOT EXISTS intraday_24hour (
    date TEXT NOT NULL,
    symbol TEXT NOT NULL,
    exchange TEXT NOT NULL,
    open REAL NOT NULL,
    high REAL NOT NULL,
    low REAL NOT NULL,
    close REAL NOT NULL,
    last REAL NOT NULL,
    volume REAL NOT NULL,
    PRIMARY KEY (symbol, date)
);

CREATE INDEX IF NOT EXISTS idx_intraday_24hour_date ON intraday_24hour(date);
"#;
