#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use quorum_core::types::{Bar, QualityLevel, Series, SourceResult, ValidationMeta, ValidationResult};
use quorum_core::validate_series;

pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// A bar where every price field equals `close`, so weighted/median math
/// stays trivial to verify by hand.
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

/// A source whose validation verdict is computed from its own series.
pub fn source(name: &str, weight: f64, closes: &[(i64, f64)]) -> SourceResult {
    let series = series_of(closes);
    let validation = validate_series(&series);
    SourceResult {
        source: name.to_string(),
        series,
        validation,
        weight,
    }
}

/// A source with a hand-picked quality score, for tie-break scenarios.
pub fn source_with_quality(
    name: &str,
    weight: f64,
    quality: f64,
    closes: &[(i64, f64)],
) -> SourceResult {
    let series = series_of(closes);
    let validation = ValidationResult {
        is_valid: true,
        quality_score: quality,
        quality_level: QualityLevel::from_score(quality),
        errors: vec![],
        warnings: vec![],
        meta: ValidationMeta {
            bars: series.len(),
            first_ts: series.first_ts(),
            last_ts: series.last_ts(),
        },
    };
    SourceResult {
        source: name.to_string(),
        series,
        validation,
        weight,
    }
}
