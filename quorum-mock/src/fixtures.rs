//! Deterministic OHLCV fixtures.

use chrono::{DateTime, Days, NaiveDate, Utc};
use quorum_core::{Bar, Series};

/// Canned daily series for a handful of well-known symbols.
#[must_use]
pub fn by_symbol(s: &str) -> Option<Series> {
    match s {
        "AAPL" => Some(build(&[
            ("2023-01-02", 140.0, 142.0, 139.0, 141.0, 10_000_000.0),
            ("2023-01-03", 141.0, 143.0, 140.0, 142.0, 11_000_000.0),
            ("2023-01-04", 142.0, 144.0, 141.0, 143.5, 9_500_000.0),
        ])),
        "MSFT" => Some(build(&[
            ("2023-01-02", 240.0, 243.0, 238.0, 241.0, 7_000_000.0),
            ("2023-01-03", 241.0, 244.0, 240.0, 243.0, 7_200_000.0),
        ])),
        "BTC-USD" => Some(build(&[
            ("2023-01-02", 16_600.0, 16_800.0, 16_500.0, 16_750.0, 120_000.0),
            ("2023-01-03", 16_750.0, 16_950.0, 16_700.0, 16_900.0, 130_000.0),
        ])),
        _ => None,
    }
}

fn build(rows: &[(&str, f64, f64, f64, f64, f64)]) -> Series {
    Series::new(
        rows.iter()
            .map(|&(date, open, high, low, close, volume)| Bar {
                ts: day(date),
                open: Some(open),
                high: Some(high),
                low: Some(low),
                close: Some(close),
                volume: Some(volume),
            })
            .collect(),
    )
}

/// Midnight UTC for a `YYYY-MM-DD` date string.
///
/// # Panics
/// Panics on a malformed date; fixtures are compile-time literals.
#[must_use]
pub fn day(date: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// A bar at `ts` where every price field equals `close` (volume 1000).
///
/// Keeps weighted/median arithmetic trivial to reason about in tests.
#[must_use]
pub const fn flat_bar(ts: DateTime<Utc>, close: f64) -> Bar {
    Bar {
        ts,
        open: Some(close),
        high: Some(close),
        low: Some(close),
        close: Some(close),
        volume: Some(1000.0),
    }
}

/// Daily series starting at `start`, one flat bar per entry of `closes`.
#[must_use]
pub fn series_of_closes(start: DateTime<Utc>, closes: &[f64]) -> Series {
    Series::new(
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| flat_bar(start + Days::new(i as u64), close))
            .collect(),
    )
}
