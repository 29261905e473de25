//! Bitazza Level-1 summary client.

pub mod summary;

use reqwest::Client;
use rust_decimal::Decimal;
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};
use summary::{decode_summary, find_instrument};

/// Bitazza instrument id of the USDT/THB pair.
pub const USDT_THB_INSTRUMENT_ID: u32 = 5;

/// HTTP client for the Level-1 summary endpoint.
pub struct SummaryClient {
    http: Client,
    url: Url,
}

impl SummaryClient {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }

    /// Fetch the last traded USDT/THB price.
    ///
    /// One GET, no retry. Fails on transport errors, non-success status,
    /// an undecodable outer array, or when no USDT/THB record is present.
    pub async fn last_traded_price(&self) -> Result<Decimal> {
        debug!(url = %self.url, "Fetching level-1 summary");

        let response = self.http.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response.text().await?;
        let quotes = decode_summary(&body)?;

        let quote = find_instrument(&quotes, USDT_THB_INSTRUMENT_ID).ok_or(
            Error::InstrumentNotFound {
                instrument_id: USDT_THB_INSTRUMENT_ID,
            },
        )?;

        info!(
            instrument_id = quote.instrument_id,
            price = %quote.last_traded_px,
            "Quote fetched"
        );

        Ok(quote.last_traded_px)
    }
}
