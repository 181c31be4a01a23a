//! Marketstack intraday API adapter

use crate::config::DateRange;
use crate::db::models::Interval;
use crate::error::{AppError, Result};
use crate::provider::types::{ErrorEnvelope, Page};
use crate::provider::IntradayProvider;
use async_trait::async_trait;
use reqwest::Client;

const BASE_URL: &str = "https://api.marketstack.com";

/// Marketstack `/v1/intraday` client
pub struct MarketstackClient {
    client: Client,
    base_url: String,
    access_key: String,
}

impl MarketstackClient {
    pub fn new(access_key: String) -> Self {
        Self::with_base_url(access_key, BASE_URL.to_string())
    }

    /// Point the client at a different host (test servers).
    pub fn with_base_url(access_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url,
            access_key,
        }
    }
}

#[async_trait]
impl IntradayProvider for MarketstackClient {
    async fn fetch_intraday(
        &self,
        symbol: &str,
        interval: Interval,
        range: &DateRange,
        limit: u64,
        offset: u64,
    ) -> Result<Page> {
        let date_from = range.date_from();
        let date_to = range.date_to();
        let limit_param = limit.to_string();
        let offset_param = offset.to_string();

        let response = self
            .client
            .get(format!("{}/v1/intraday", self.base_url))
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("symbols", symbol),
                ("interval", interval.query_value()),
                ("date_from", date_from.as_str()),
                ("date_to", date_to.as_str()),
                ("limit", limit_param.as_str()),
                ("sort", "ASC"),
                ("offset", offset_param.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Decode the provider's {code, message} envelope; tolerate
            // bodies that do not match it.
            let envelope = response
                .json::<ErrorEnvelope>()
                .await
                .unwrap_or_default();
            tracing::error!(
                symbol,
                interval = %interval,
                date_from = date_from.as_str(),
                date_to = date_to.as_str(),
                limit,
                offset,
                status = status.as_u16(),
                code = %envelope.error.code,
                message = %envelope.error.message,
                "Intraday fetch failed"
            );
            return Err(AppError::Provider {
                status: status.as_u16(),
                code: envelope.error.code,
                message: envelope.error.message,
            });
        }

        Ok(response.json::<Page>().await?)
    }
}
