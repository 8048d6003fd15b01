#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use quorum::{Bar, ConsensusRequest, Interval, Quorum, Series, SeriesRequest, SourceAdapter};
use quorum_mock::MockAdapter;

pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// A bar where every price field equals `close`.
pub fn flat_bar(secs: i64, close: f64) -> Bar {
    Bar {
        ts: ts(secs),
        open: Some(close),
        high: Some(close),
        low: Some(close),
        close: Some(close),
        volume: Some(1000.0),
    }
}

pub fn series_of(closes: &[(i64, f64)]) -> Series {
    Series::new(closes.iter().map(|&(s, c)| flat_bar(s, c)).collect())
}

/// A healthy mock adapter serving the given closes with the given weight.
pub fn adapter(name: &'static str, weight: f64, closes: &[(i64, f64)]) -> Arc<dyn SourceAdapter> {
    Arc::new(MockAdapter::serving(name, weight, series_of(closes)))
}

/// Build an engine over the given adapters with default configuration.
pub fn engine(adapters: Vec<Arc<dyn SourceAdapter>>) -> Quorum {
    let mut builder = Quorum::builder();
    for a in adapters {
        builder = builder.with_adapter(a);
    }
    builder.build().unwrap()
}

/// A standard daily request covering all test timestamps.
pub fn request() -> ConsensusRequest {
    ConsensusRequest::new(
        SeriesRequest::new("AAPL", ts(0), ts(1_000_000), Interval::D1).unwrap(),
    )
}
