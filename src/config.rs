//! Run configuration
//!
//! All throttling parameters are fixed at run start and threaded explicitly
//! through the orchestrator, the batch runner, and the per-symbol workers.
//! Nothing in the sync path reads ambient globals.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::time::Duration;

/// Max records requested per provider call.
pub const DEFAULT_PAGE_LIMIT: u64 = 1000;

/// Upstream ceiling: requests allowed per rate window.
pub const DEFAULT_REQUESTS_PER_WINDOW: u32 = 5;

/// Rate window duration.
pub const DEFAULT_WINDOW_MS: u64 = 1000;

/// Minimum duration of one provider call per symbol.
pub const DEFAULT_CALL_PACING_MS: u64 = 1000;

/// Default lookback when no date range is given (~ten years).
pub const DEFAULT_LOOKBACK_DAYS: i64 = 3652;

/// Process-wide throttling and paging parameters for one sync run.
///
/// Two throttles overlap by design: `batch_quota`/`window` caps how many
/// symbol jobs *start* a provider call per window across the run, while
/// `min_call_pacing` caps how fast any single symbol's sequential pagination
/// can go. Together the aggregate request rate is bounded by
/// `batch_quota / window` since each symbol has at most one call in flight.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Records requested per page.
    pub page_limit: u64,
    /// Provider's advertised ceiling, requests per `window`.
    pub requests_per_window: u32,
    /// Jobs released per `window` by the batch runner.
    pub batch_quota: usize,
    /// Batch runner window duration.
    pub window: Duration,
    /// Minimum elapsed time per provider call within one symbol's worker.
    pub min_call_pacing: Duration,
    /// Days before "now" used when no explicit range is supplied.
    pub lookback_days: i64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::for_rate_limit(DEFAULT_REQUESTS_PER_WINDOW)
    }
}

impl SyncConfig {
    /// Build a config for a provider ceiling of `requests_per_window`.
    ///
    /// The batch quota keeps one request of headroom below the ceiling so a
    /// straggler from the previous window cannot tip a run over the limit.
    pub fn for_rate_limit(requests_per_window: u32) -> Self {
        let batch_quota = requests_per_window.saturating_sub(1).max(1) as usize;
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            requests_per_window,
            batch_quota,
            window: Duration::from_millis(DEFAULT_WINDOW_MS),
            min_call_pacing: Duration::from_millis(DEFAULT_CALL_PACING_MS),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    /// Default inclusive date range: `lookback_days` before now, up to now.
    pub fn default_range(&self) -> DateRange {
        let to = Utc::now();
        let from = to - ChronoDuration::days(self.lookback_days);
        DateRange { from, to }
    }
}

/// Inclusive date range for one run.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// Range start in the provider's wire format (`2016-03-04T09:30:00+0000`).
    pub fn date_from(&self) -> String {
        format_wire(&self.from)
    }

    /// Range end in the provider's wire format.
    pub fn date_to(&self) -> String {
        format_wire(&self.to)
    }
}

fn format_wire(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%z").to_string()
}
