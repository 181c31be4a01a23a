//! Per-symbol paginated sync worker

use crate::config::{DateRange, SyncConfig};
use crate::db::models::Interval;
use crate::db::IntradayDb;
use crate::error::Result;
use crate::provider::IntradayProvider;
use tokio::time::{sleep, Instant};

/// What one worker accomplished for its symbol.
#[derive(Debug, Clone)]
pub struct SymbolReport {
    pub symbol: String,
    pub pages: u64,
    pub rows: u64,
}

/// Synchronize one symbol across the full date range.
///
/// Pages are fetched and persisted sequentially starting at offset 0; the
/// offset is advanced by the page limit until the provider returns a short
/// page (`count < limit`). Each iteration is padded to at least
/// `min_call_pacing`, bounding this symbol's request rate independently of
/// provider latency. Any fetch or persistence error fails the worker as a
/// whole; previously persisted pages stay in place.
pub async fn sync_symbol<P>(
    provider: &P,
    db: &IntradayDb,
    symbol: &str,
    interval: Interval,
    range: &DateRange,
    config: &SyncConfig,
) -> Result<SymbolReport>
where
    P: IntradayProvider + ?Sized,
{
    let mut offset = 0u64;
    let mut pages = 0u64;
    let mut rows = 0u64;

    loop {
        let began = Instant::now();

        tracing::info!(symbol, interval = %interval, offset, "Fetching intraday page");
        let page = provider
            .fetch_intraday(symbol, interval, range, config.page_limit, offset)
            .await?;

        db.replace_window(interval, symbol, &page.data)?;
        pages += 1;
        rows += page.data.len() as u64;
        tracing::debug!(
            symbol,
            offset,
            persisted = page.data.len(),
            count = page.pagination.count,
            "Persisted page"
        );

        // Every call, including an empty or terminal page, is padded to the
        // pacing floor before the loop decides to stop.
        let elapsed = began.elapsed();
        if elapsed < config.min_call_pacing {
            sleep(config.min_call_pacing - elapsed).await;
        }

        if page.pagination.count < config.page_limit {
            break;
        }
        offset += config.page_limit;
    }

    Ok(SymbolReport {
        symbol: symbol.to_string(),
        pages,
        rows,
    })
}
