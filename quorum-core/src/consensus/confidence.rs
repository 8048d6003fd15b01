use std::collections::BTreeMap;

use crate::types::{ConfidenceWeights, Series, SourceResult};

/// Pearson correlation coefficient between two equally-long samples.
///
/// Returns `None` when the correlation is undefined: fewer than two points,
/// or zero variance on either side (constant series).
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    if n < 2 {
        return None;
    }
    let len = n as f64;
    let mean_x = xs.iter().sum::<f64>() / len;
    let mean_y = ys.iter().sum::<f64>() / len;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    let r = cov / (var_x * var_y).sqrt();
    r.is_finite().then_some(r)
}

/// Per-source agreement with the consensus closes.
///
/// Agreement is the absolute Pearson correlation between a source's closes
/// and the consensus closes over the timestamps where both are present;
/// an undefined correlation counts as 0.0. Every source gets an entry.
#[must_use]
pub fn source_agreement(sources: &[SourceResult], consensus: &Series) -> BTreeMap<String, f64> {
    let mut agreement = BTreeMap::new();
    for s in sources {
        let mut source_closes = Vec::new();
        let mut consensus_closes = Vec::new();
        for (ts, cons) in consensus.closes() {
            if let Some(src) = s.series.close_at(ts) {
                source_closes.push(src);
                consensus_closes.push(cons);
            }
        }
        let r = pearson(&source_closes, &consensus_closes)
            .map(f64::abs)
            .unwrap_or(0.0);
        agreement.insert(s.source.clone(), r);
    }
    agreement
}

/// Combine source count, mean quality, and mean agreement into one
/// confidence value in `[0, 1]`.
///
/// `confidence = w_count * min(1, n / saturation) + w_quality * mean(quality)
/// + w_agreement * mean(agreement)`, clamped; runs with fewer than
/// `min_sources` contributors are additionally multiplied by the degraded
/// penalty.
#[must_use]
pub fn confidence_score(
    sources: &[SourceResult],
    agreement: &BTreeMap<String, f64>,
    weights: &ConfidenceWeights,
    min_sources: usize,
) -> f64 {
    if sources.is_empty() {
        return 0.0;
    }
    let n = sources.len() as f64;
    let saturation = weights.saturation_sources.max(1) as f64;

    let count_factor = (n / saturation).min(1.0);
    let avg_quality = sources
        .iter()
        .map(|s| s.validation.quality_score)
        .sum::<f64>()
        / n;
    // Undefined correlations are already recorded as 0.0, so every source
    // weighs into the mean.
    let avg_agreement = sources
        .iter()
        .map(|s| agreement.get(&s.source).copied().unwrap_or(0.0))
        .sum::<f64>()
        / n;

    let mut confidence = weights.source_count * count_factor
        + weights.quality * avg_quality
        + weights.agreement * avg_agreement;
    confidence = confidence.clamp(0.0, 1.0);
    if sources.len() < min_sources {
        confidence *= weights.degraded_penalty;
    }
    confidence
}
