//! Lenient decoding of the Level-1 summary payload.
//!
//! The endpoint returns a JSON array of strings, each element itself a
//! JSON-encoded quote object. The feed routinely carries records in shapes
//! this client does not care about, so elements that fail to decode are
//! skipped instead of failing the whole call.

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// One instrument quote from the summary payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstrumentQuote {
    #[serde(rename = "InstrumentId")]
    pub instrument_id: u32,
    #[serde(rename = "LastTradedPx")]
    pub last_traded_px: Decimal,
}

/// Decode the outer array and every inner record that parses.
///
/// Fails only if the outer array itself is not valid JSON.
pub fn decode_summary(body: &str) -> Result<Vec<InstrumentQuote>> {
    let raw: Vec<String> = serde_json::from_str(body)?;
    let total = raw.len();

    let quotes: Vec<InstrumentQuote> = raw
        .iter()
        .filter_map(|record| serde_json::from_str(record).ok())
        .collect();

    if quotes.len() < total {
        debug!(
            skipped = total - quotes.len(),
            total, "Skipped undecodable summary records"
        );
    }

    Ok(quotes)
}

/// First quote matching the given instrument id.
#[must_use]
pub fn find_instrument(quotes: &[InstrumentQuote], instrument_id: u32) -> Option<&InstrumentQuote> {
    quotes.iter().find(|q| q.instrument_id == instrument_id)
}
