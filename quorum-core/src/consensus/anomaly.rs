use crate::types::{AnomalyKind, AnomalyRecord, Series, SourceResult};

/// Flag per-source observations that deviate from the consensus closes.
///
/// For every (source, timestamp) pair where both sides report a close,
/// the relative deviation `|source / consensus - 1|` is compared against
/// `threshold` (a fraction, e.g. 0.10 for 10%). Missing observations and
/// zero consensus closes are non-comparable and skipped.
#[must_use]
pub fn detect_anomalies(
    sources: &[SourceResult],
    consensus: &Series,
    threshold: f64,
) -> Vec<AnomalyRecord> {
    let mut anomalies = Vec::new();
    for s in sources {
        for (ts, consensus_close) in consensus.closes() {
            if consensus_close == 0.0 {
                continue;
            }
            let Some(source_close) = s.series.close_at(ts) else {
                continue;
            };
            let deviation = (source_close / consensus_close - 1.0).abs();
            if deviation > threshold {
                anomalies.push(AnomalyRecord {
                    source: s.source.clone(),
                    ts,
                    consensus_close,
                    source_close,
                    deviation_pct: deviation * 100.0,
                    kind: AnomalyKind::PriceDeviation,
                });
            }
        }
    }
    anomalies
}
