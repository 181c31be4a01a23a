//! Range orchestration
//!
//! Builds one paginated worker job per symbol, hands the list to the
//! throttled batch runner, and reports the aggregate outcome. A failed
//! symbol never aborts its siblings; it is logged and counted.

mod worker;

pub use worker::{sync_symbol, SymbolReport};

use crate::config::{DateRange, SyncConfig};
use crate::db::models::Interval;
use crate::db::IntradayDb;
use crate::error::Result;
use crate::provider::{IntradayProvider, MarketstackClient};
use crate::scheduler::run_batched;
use crate::symbols::load_symbols;
use std::path::Path;

/// Settled per-symbol outcomes of one run, in input order.
pub struct RunSummary {
    pub outcomes: Vec<(String, Result<SymbolReport>)>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Run every symbol's worker through the batch runner and settle all of
/// them. Outcomes are returned in symbol order regardless of completion
/// timing.
pub async fn process_range(
    provider: &dyn IntradayProvider,
    db: &IntradayDb,
    symbols: &[String],
    interval: Interval,
    range: &DateRange,
    config: &SyncConfig,
) -> RunSummary {
    tracing::info!(
        symbols = symbols.len(),
        interval = %interval,
        quota = config.batch_quota,
        window_ms = config.window.as_millis() as u64,
        "Starting range sync"
    );

    let jobs: Vec<_> = symbols
        .iter()
        .map(|symbol| sync_symbol(provider, db, symbol.as_str(), interval, range, config))
        .collect();

    let settled = run_batched(jobs, config.batch_quota, config.window).await;
    let outcomes: Vec<_> = symbols.iter().cloned().zip(settled).collect();

    for (symbol, outcome) in &outcomes {
        match outcome {
            Ok(report) => tracing::info!(
                symbol = symbol.as_str(),
                pages = report.pages,
                rows = report.rows,
                "Symbol synchronized"
            ),
            Err(err) => tracing::warn!(symbol = symbol.as_str(), error = %err, "Symbol failed"),
        }
    }

    RunSummary { outcomes }
}

/// Full run entry: open the store, load the symbol list, sync the range,
/// and release the store connection only after every job has settled.
pub async fn run(
    config: &SyncConfig,
    interval: Interval,
    range: DateRange,
    symbols_path: &Path,
    db_path: &Path,
    access_key: String,
) -> Result<RunSummary> {
    let db = IntradayDb::open(db_path)?;
    let symbols = load_symbols(symbols_path)?;
    let provider = MarketstackClient::new(access_key);

    let summary = process_range(&provider, &db, &symbols, interval, &range, config).await;

    tracing::info!(
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "Range sync finished"
    );

    Ok(summary)
    // db is dropped here, after the last job settled
}
