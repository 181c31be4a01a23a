//! Window replacement for intraday rows
//!
//! One page of records for one symbol is persisted by deleting every stored
//! row whose date falls inside the page's date span and re-inserting the
//! page, all inside a single transaction. Re-running the same page is a
//! no-op net of the replace; a failure before commit leaves prior rows
//! untouched.

use crate::db::models::{Interval, IntradayRecord};
use crate::error::Result;
use rusqlite::{params, Connection};

/// Atomically replace the stored window covered by `records`.
///
/// `records` must be sorted ascending by date; the first and last record
/// bound the deleted span. An empty page commits with no effect.
pub fn replace_window(
    conn: &mut Connection,
    interval: Interval,
    symbol: &str,
    records: &[IntradayRecord],
) -> Result<()> {
    let table = interval.table();
    let tx = conn.transaction()?;

    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        tx.execute(
            &format!(
                "DELETE FROM {} WHERE symbol = ?1 AND date BETWEEN ?2 AND ?3",
                table
            ),
            params![symbol, first.date, last.date],
        )?;
    }

    let mut stmt = tx.prepare(&format!(
        "INSERT INTO {} (date, symbol, exchange, open, high, low, close, last, volume)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        table
    ))?;

    for record in records {
        stmt.execute(params![
            record.date,
            record.symbol,
            record.exchange,
            record.open,
            record.high,
            record.low,
            record.close,
            record.last,
            record.volume,
        ])?;
    }

    drop(stmt);
    tx.commit()?;

    Ok(())
}

/// Query stored rows for one symbol within an inclusive date span, ascending.
pub fn query_window(
    conn: &Connection,
    interval: Interval,
    symbol: &str,
    date_from: &str,
    date_to: &str,
) -> Result<Vec<IntradayRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT date, symbol, exchange, open, high, low, close, last, volume
         FROM {}
         WHERE symbol = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC",
        interval.table()
    ))?;

    let rows = stmt
        .query_map(params![symbol, date_from, date_to], |row| {
            Ok(IntradayRecord {
                date: row.get(0)?,
                symbol: row.get(1)?,
                exchange: row.get(2)?,
                open: row.get(3)?,
                high: row.get(4)?,
                low: row.get(5)?,
                close: row.get(6)?,
                last: row.get(7)?,
                volume: row.get(8)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
