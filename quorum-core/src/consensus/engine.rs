use crate::consensus::align::Alignment;
use crate::types::{Bar, BarField, ConsensusMethod, Series, SourceResult};

/// Reconcile aligned source observations into one series.
///
/// Every timestamp and every OHLCV field is reconciled independently from
/// only the sources with a present value there. A timestamp where no field
/// finds a contributor is dropped, never fabricated. With exactly one
/// source overall the engine short-circuits and returns that series
/// unchanged regardless of method.
#[must_use]
pub fn build_consensus(
    sources: &[SourceResult],
    aligned: &Alignment,
    method: ConsensusMethod,
) -> Series {
    if sources.is_empty() {
        return Series::empty();
    }
    if let [only] = sources {
        return only.series.clone();
    }
    if method == ConsensusMethod::HighestQuality {
        return best_quality_source(sources).series.clone();
    }

    let weights: Vec<f64> = sources.iter().map(|s| s.weight).collect();
    let mut out = Vec::with_capacity(aligned.len());
    for (row, &ts) in aligned.timestamps().iter().enumerate() {
        let mut bar = Bar::blank(ts);
        for field in BarField::ALL {
            let votes: Vec<(f64, f64)> = aligned
                .columns()
                .iter()
                .zip(&weights)
                .filter_map(|(col, &w)| {
                    col.bars[row].and_then(|b| b.get(field)).map(|v| (v, w))
                })
                .collect();
            bar.set(field, reconcile_field(&votes, method));
        }
        if !bar.is_blank() {
            out.push(bar);
        }
    }
    Series::new(out)
}

/// Reconcile one field at one timestamp from `(value, weight)` votes.
///
/// Returns `None` when nothing contributed, including the weighted case
/// where every contributing weight is zero, which is treated as "no
/// contributing sources" rather than a division fault.
fn reconcile_field(votes: &[(f64, f64)], method: ConsensusMethod) -> Option<f64> {
    if votes.is_empty() {
        return None;
    }
    match method {
        ConsensusMethod::WeightedAverage => {
            let total: f64 = votes.iter().map(|&(_, w)| w).sum();
            if total <= 0.0 {
                return None;
            }
            Some(votes.iter().map(|&(v, w)| v * w).sum::<f64>() / total)
        }
        // Majority reconciles via the median: continuous prices rarely tie
        // exactly, so the median is the majority-equivalent measure here.
        ConsensusMethod::Median | ConsensusMethod::Majority => {
            let mut values: Vec<f64> = votes.iter().map(|&(v, _)| v).collect();
            values.sort_unstable_by(f64::total_cmp);
            Some(median_of_sorted(&values))
        }
        // HighestQuality adopts a whole source before per-field voting.
        _ => None,
    }
}

fn median_of_sorted(values: &[f64]) -> f64 {
    let n = values.len();
    let mid = n / 2;
    if n % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

/// The source with the highest validation quality score; ties break toward
/// the highest weight, then the first in input order.
fn best_quality_source(sources: &[SourceResult]) -> &SourceResult {
    let mut best = &sources[0];
    for s in &sources[1..] {
        let better = s.validation.quality_score > best.validation.quality_score
            || (s.validation.quality_score == best.validation.quality_score
                && s.weight > best.weight);
        if better {
            best = s;
        }
    }
    best
}
