use core::fmt;
use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QuorumError;
use crate::request::Interval;
use crate::series::Series;
use crate::validation::ValidationResult;

/// Method for reconciling aligned source observations into one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum ConsensusMethod {
    /// Reliability-weighted mean over the sources present at each timestamp,
    /// with weights renormalized over that contributing subset.
    #[default]
    WeightedAverage,
    /// Statistical median of the contributing values (even counts average
    /// the two middle values).
    Median,
    /// Majority vote. Continuous prices rarely tie exactly, so this
    /// reconciles via the median as the majority-equivalent measure of
    /// central tendency.
    Majority,
    /// Adopt, for the whole window, the single source with the highest
    /// validation quality score (ties: highest weight, then input order).
    HighestQuality,
}

impl ConsensusMethod {
    /// Canonical wire code for the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightedAverage => "weighted_average",
            Self::Median => "median",
            Self::Majority => "majority",
            Self::HighestQuality => "highest_quality",
        }
    }
}

impl fmt::Display for ConsensusMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsensusMethod {
    type Err = QuorumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weighted_average" => Ok(Self::WeightedAverage),
            "median" => Ok(Self::Median),
            "majority" => Ok(Self::Majority),
            "highest_quality" => Ok(Self::HighestQuality),
            other => Err(QuorumError::invalid_arg(format!(
                "unknown consensus method: {other}"
            ))),
        }
    }
}

/// One source's contribution to a consensus run: its fetched series, the
/// validation verdict on that series, and the adapter's static reliability
/// weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceResult {
    /// Adapter name the series came from.
    pub source: String,
    /// The fetched series (non-empty by construction in the orchestrator).
    pub series: Series,
    /// Per-call quality verdict for the series.
    pub validation: ValidationResult,
    /// Static reliability weight in `[0, 1]`, used by weighted consensus.
    pub weight: f64,
}

/// Classification of a flagged disagreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnomalyKind {
    /// A source close deviated from the consensus close beyond the
    /// configured threshold.
    PriceDeviation,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriceDeviation => f.write_str("price_deviation"),
        }
    }
}

/// One flagged (source, timestamp) disagreement with the consensus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// Adapter name of the deviating source.
    pub source: String,
    /// Timestamp of the deviating observation.
    pub ts: DateTime<Utc>,
    /// Consensus close at that timestamp.
    pub consensus_close: f64,
    /// The source's close at that timestamp.
    pub source_close: f64,
    /// Absolute deviation as a percentage (fraction x 100).
    pub deviation_pct: f64,
    /// What kind of disagreement was flagged.
    pub kind: AnomalyKind,
}

/// Terminal state of a consensus run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsensusOutcome {
    /// Two or more sources were reconciled.
    Reconciled,
    /// Exactly one usable source; its series was adopted with degraded
    /// confidence.
    Fallback,
    /// No usable source at all; the result carries an empty series and zero
    /// confidence.
    NoData,
}

impl ConsensusOutcome {
    /// True for the degraded single-source state.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }

    /// True for the terminal no-data state.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::NoData)
    }
}

/// Descriptive metadata attached to every [`ConsensusResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusMetadata {
    /// Number of sources that contributed to the run.
    pub sources_used: usize,
    /// Reconciliation method that was applied.
    pub method: ConsensusMethod,
    /// Requested symbol.
    pub symbol: String,
    /// Inclusive window start.
    pub start: DateTime<Utc>,
    /// Inclusive window end.
    pub end: DateTime<Utc>,
    /// Requested bar cadence.
    pub interval: Interval,
    /// Terminal state of the run.
    pub outcome: ConsensusOutcome,
    /// Why the run degraded, when it did (e.g. "insufficient_sources").
    pub fallback_reason: Option<String>,
}

/// The externally visible artifact of a consensus run.
///
/// Callers always receive one of these, never an error: degradation is
/// expressed through `confidence` and `meta.outcome`, not exceptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// The reconciled series (empty in the no-data state).
    pub series: Series,
    /// Overall confidence in `[0, 1]`.
    pub confidence: f64,
    /// Per-source absolute correlation with the consensus closes.
    pub source_agreement: BTreeMap<String, f64>,
    /// Flagged (source, timestamp) disagreements.
    pub anomalies: Vec<AnomalyRecord>,
    /// Run metadata, including the terminal state.
    pub meta: ConsensusMetadata,
}
