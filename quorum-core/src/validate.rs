use crate::types::{QualityLevel, Series, ValidationMeta, ValidationResult};

// Deductions and thresholds for the quality walk. The score starts at 1.0,
// only decreases, and is floored at 0.
const MISSING_ERROR_RATIO: f64 = 0.10;
const MISSING_WARN_RATIO: f64 = 0.05;
const MISSING_ERROR_DEDUCTION: f64 = 0.3;
const MISSING_WARN_DEDUCTION: f64 = 0.1;
const INVALID_PRICE_DEDUCTION: f64 = 0.4;
const INCONSISTENT_HL_DEDUCTION: f64 = 0.5;
const EXTREME_RETURN: f64 = 0.20;
const EXTREME_RETURN_RATIO: f64 = 0.05;
const EXTREME_RETURN_DEDUCTION: f64 = 0.1;

/// Validate one source's series and score its quality.
///
/// Checks, in order: presence of data, missing-value ratio over the OHLC
/// fields, non-positive closes, inverted high/low pairs, and the share of
/// extreme single-bar returns. Errors mark the series invalid; warnings only
/// lower the score, so a series can be valid with a score below 1.0.
#[must_use]
pub fn validate_series(series: &Series) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut score = 1.0_f64;

    if series.is_empty() {
        errors.push("no data returned".to_string());
        score = 0.0;
    } else {
        let missing = missing_ohlc_ratio(series);
        if missing > MISSING_ERROR_RATIO {
            errors.push(format!("high missing data ratio: {:.2}%", missing * 100.0));
            score -= MISSING_ERROR_DEDUCTION;
        } else if missing > MISSING_WARN_RATIO {
            warnings.push(format!("some missing data: {:.2}%", missing * 100.0));
            score -= MISSING_WARN_DEDUCTION;
        }

        let invalid_closes = series
            .iter()
            .filter(|b| b.close.is_some_and(|c| c <= 0.0))
            .count();
        if invalid_closes > 0 {
            errors.push(format!("invalid prices found: {invalid_closes}"));
            score -= INVALID_PRICE_DEDUCTION;
        }

        let inverted = series
            .iter()
            .filter(|b| matches!((b.high, b.low), (Some(h), Some(l)) if h < l))
            .count();
        if inverted > 0 {
            errors.push(format!("inconsistent high/low prices: {inverted}"));
            score -= INCONSISTENT_HL_DEDUCTION;
        }

        let (returns, extreme) = extreme_return_counts(series);
        if returns > 0 && extreme as f64 > returns as f64 * EXTREME_RETURN_RATIO {
            warnings.push(format!("many extreme returns: {extreme}"));
            score -= EXTREME_RETURN_DEDUCTION;
        }
    }

    let quality_score = score.max(0.0);
    ValidationResult {
        is_valid: errors.is_empty(),
        quality_score,
        quality_level: QualityLevel::from_score(quality_score),
        errors,
        warnings,
        meta: ValidationMeta {
            bars: series.len(),
            first_ts: series.first_ts(),
            last_ts: series.last_ts(),
        },
    }
}

/// Share of missing cells across the four OHLC fields of every bar.
fn missing_ohlc_ratio(series: &Series) -> f64 {
    let cells = series.len() * 4;
    if cells == 0 {
        return 0.0;
    }
    let missing: usize = series
        .iter()
        .map(|b| b.ohlc().iter().filter(|v| v.is_none()).count())
        .sum();
    missing as f64 / cells as f64
}

/// Count single-bar returns between consecutive present closes, and how many
/// of them exceed the extreme-return threshold.
fn extreme_return_counts(series: &Series) -> (usize, usize) {
    let mut returns = 0usize;
    let mut extreme = 0usize;
    for pair in series.bars().windows(2) {
        let (Some(prev), Some(cur)) = (pair[0].close, pair[1].close) else {
            continue;
        };
        returns += 1;
        if (cur / prev - 1.0).abs() > EXTREME_RETURN {
            extreme += 1;
        }
    }
    (returns, extreme)
}
