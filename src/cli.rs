//! Command-line entry

use crate::config::{DateRange, SyncConfig};
use crate::db::models::Interval;
use crate::error::{AppError, Result};
use chrono::{NaiveDate, TimeZone, Utc};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "intrasync", version, about = "Rate-limited intraday market data sync")]
pub struct Cli {
    /// Query granularity and destination table: 5min, 1hour or 24hour
    #[arg(long, default_value = "5min")]
    pub interval: Interval,

    /// Inclusive range start (YYYY-MM-DD); defaults to the lookback window
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Inclusive range end (YYYY-MM-DD); defaults to now
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Newline-delimited symbol list
    #[arg(long, default_value = "symbols.txt")]
    pub symbols_file: PathBuf,

    /// SQLite database path
    #[arg(long, default_value = "intraday.db")]
    pub database: PathBuf,

    /// Provider access key; falls back to $MARKETSTACK_ACCESS_KEY
    #[arg(long)]
    pub access_key: Option<String>,
}

impl Cli {
    /// Resolve the run's date range: explicit bounds win, otherwise the
    /// configured lookback ending now.
    pub fn range(&self, config: &SyncConfig) -> DateRange {
        let default = config.default_range();
        let from = self
            .from
            .map(|d| Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0).unwrap()))
            .unwrap_or(default.from);
        let to = self
            .to
            .map(|d| Utc.from_utc_datetime(&d.and_hms_opt(23, 59, 59).unwrap()))
            .unwrap_or(default.to);
        DateRange { from, to }
    }

    /// Access key from the flag or the environment.
    pub fn resolve_access_key(&self) -> Result<String> {
        self.access_key
            .clone()
            .or_else(|| std::env::var("MARKETSTACK_ACCESS_KEY").ok())
            .ok_or_else(|| {
                AppError::Config(
                    "no access key: pass --access-key or set MARKETSTACK_ACCESS_KEY".to_string(),
                )
            })
    }
}
