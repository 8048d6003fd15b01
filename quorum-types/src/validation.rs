use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse data-quality bucket derived from a quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityLevel {
    /// Score >= 0.9.
    Excellent,
    /// Score >= 0.7.
    Good,
    /// Score >= 0.5.
    Fair,
    /// Score >= 0.3.
    Poor,
    /// Score < 0.3.
    Unknown,
}

impl QualityLevel {
    /// Bucket a score. Boundaries are inclusive: exactly 0.9 is `Excellent`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Self::Excellent
        } else if score >= 0.7 {
            Self::Good
        } else if score >= 0.5 {
            Self::Fair
        } else if score >= 0.3 {
            Self::Poor
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Shape summary of the series a validation ran over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationMeta {
    /// Number of bars inspected.
    pub bars: usize,
    /// Timestamp of the first bar, if any.
    pub first_ts: Option<DateTime<Utc>>,
    /// Timestamp of the last bar, if any.
    pub last_ts: Option<DateTime<Utc>>,
}

/// Outcome of validating one source's series for one request.
///
/// Derived solely from the series and never mutated afterwards. A result can
/// be valid (`errors` empty) while still scoring below 1.0 when only
/// warnings were raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no errors were recorded.
    pub is_valid: bool,
    /// Quality score in `[0, 1]`; starts at 1.0 and only decreases.
    pub quality_score: f64,
    /// Bucketed quality level for the final score.
    pub quality_level: QualityLevel,
    /// Hard data problems (invalid prices, inconsistent high/low, ...).
    pub errors: Vec<String>,
    /// Soft findings that lower the score without invalidating the series.
    pub warnings: Vec<String>,
    /// Shape summary of the inspected series.
    pub meta: ValidationMeta,
}
