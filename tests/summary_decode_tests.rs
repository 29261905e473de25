//! Decoding tests against a realistic Level-1 summary body.
//!
//! The Bitazza endpoint wraps every quote record as a JSON-encoded string
//! inside the outer array; the fixtures below mirror that shape, including
//! the extra fields the client ignores and the occasional record it cannot
//! decode.

use bahtbot::exchange::summary::{decode_summary, find_instrument};
use bahtbot::exchange::USDT_THB_INSTRUMENT_ID;
use rust_decimal_macros::dec;

fn fixture_body(records: &[serde_json::Value]) -> String {
    let strings: Vec<String> = records.iter().map(ToString::to_string).collect();
    serde_json::to_string(&strings).unwrap()
}

fn full_record(instrument_id: u32, last_px: f64) -> serde_json::Value {
    serde_json::json!({
        "OMSId": 1,
        "InstrumentId": instrument_id,
        "BestBid": last_px - 0.01,
        "BestOffer": last_px + 0.01,
        "LastTradedPx": last_px,
        "LastTradedQty": 1250.0,
        "Rolling24HrVolume": 182_344.21,
        "SessionHigh": last_px + 0.4,
        "SessionLow": last_px - 0.3,
        "TimeStamp": "1735467300000"
    })
}

#[test]
fn decodes_multi_record_summary() {
    let body = fixture_body(&[
        full_record(1, 3_411_000.0),
        full_record(3, 118.42),
        full_record(USDT_THB_INSTRUMENT_ID, 32.50),
        full_record(9, 0.0721),
    ]);

    let quotes = decode_summary(&body).unwrap();
    assert_eq!(quotes.len(), 4);

    let quote = find_instrument(&quotes, USDT_THB_INSTRUMENT_ID).unwrap();
    assert_eq!(quote.last_traded_px, dec!(32.50));
}

#[test]
fn malformed_records_do_not_fail_the_call() {
    let strings = vec![
        "<!-- maintenance banner -->".to_string(),
        full_record(2, 95_120.0).to_string(),
        full_record(USDT_THB_INSTRUMENT_ID, 33.07).to_string(),
    ];
    let body = serde_json::to_string(&strings).unwrap();

    let quotes = decode_summary(&body).unwrap();
    assert_eq!(quotes.len(), 2);

    let quote = find_instrument(&quotes, USDT_THB_INSTRUMENT_ID).unwrap();
    assert_eq!(quote.last_traded_px, dec!(33.07));
}

#[test]
fn missing_instrument_yields_no_match() {
    let body = fixture_body(&[full_record(1, 3_411_000.0), full_record(2, 95_120.0)]);

    let quotes = decode_summary(&body).unwrap();
    assert!(find_instrument(&quotes, USDT_THB_INSTRUMENT_ID).is_none());
}

#[test]
fn empty_summary_decodes_to_no_quotes() {
    let quotes = decode_summary("[]").unwrap();
    assert!(quotes.is_empty());
    assert!(find_instrument(&quotes, USDT_THB_INSTRUMENT_ID).is_none());
}
