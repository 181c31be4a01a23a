//! Remote data provider adapters

pub mod marketstack;
pub mod types;

use crate::config::DateRange;
use crate::db::models::Interval;
use crate::error::Result;
use async_trait::async_trait;
use types::Page;

pub use marketstack::MarketstackClient;

/// A paginated source of intraday records.
///
/// Implementations return one page per call; any non-success upstream
/// outcome must surface as an error so the calling worker fails as a whole
/// for that symbol.
#[async_trait]
pub trait IntradayProvider: Send + Sync {
    /// Fetch one page of records for `symbol` at `offset`, requesting at
    /// most `limit` records sorted ascending by date.
    async fn fetch_intraday(
        &self,
        symbol: &str,
        interval: Interval,
        range: &DateRange,
        limit: u64,
        offset: u64,
    ) -> Result<Page>;
}
