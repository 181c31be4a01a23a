//! Provider wire types

use crate::db::models::IntradayRecord;
use serde::Deserialize;

/// Pagination metadata attached to every successful provider response.
///
/// `count` is the number of records actually returned; `count < limit`
/// means no further pages exist for the query.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
    pub count: u64,
    pub total: u64,
}

/// One paginated response unit: records plus pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub pagination: Pagination,
    pub data: Vec<IntradayRecord>,
}

/// Error envelope carried by non-success provider responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: ProviderErrorBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
