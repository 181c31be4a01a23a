//! Storage data models

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One intraday OHLCV observation as returned by the provider and stored in
/// the interval tables. `date` is the ordering key within a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntradayRecord {
    pub date: String,
    pub symbol: String,
    pub exchange: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub last: f64,
    pub volume: f64,
}

/// Query granularity. Selects both the provider interval parameter and the
/// destination table; never inferred, always supplied per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    FiveMin,
    OneHour,
    TwentyFourHour,
}

impl Interval {
    /// Destination table for this granularity.
    pub fn table(&self) -> &'static str {
        match self {
            Interval::FiveMin => "intraday_5min",
            Interval::OneHour => "intraday_1hour",
            Interval::TwentyFourHour => "intraday_24hour",
        }
    }

    /// Value of the provider's `interval` query parameter.
    pub fn query_value(&self) -> &'static str {
        match self {
            Interval::FiveMin => "5min",
            Interval::OneHour => "1hour",
            Interval::TwentyFourHour => "24hour",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_value())
    }
}

impl FromStr for Interval {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5min" => Ok(Interval::FiveMin),
            "1hour" => Ok(Interval::OneHour),
            "24hour" => Ok(Interval::TwentyFourHour),
            other => Err(AppError::Validation(format!(
                "invalid interval '{}', expected one of: 5min, 1hour, 24hour",
                other
            ))),
        }
    }
}
