//! Configuration types shared between the orchestrator and middleware.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consensus::ConsensusMethod;

/// Weights combined into the overall confidence score.
///
/// The defaults are the empirical constants the scoring formula shipped
/// with; no principled derivation exists for them, so they are exposed as
/// configuration rather than baked in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    /// Weight of the source-count factor.
    pub source_count: f64,
    /// Weight of the mean per-source quality score.
    pub quality: f64,
    /// Weight of the mean per-source agreement with the consensus.
    pub agreement: f64,
    /// Source count at which the count factor saturates at 1.0.
    pub saturation_sources: usize,
    /// Multiplier applied when fewer than `min_sources` contributed.
    pub degraded_penalty: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            source_count: 0.3,
            quality: 0.4,
            agreement: 0.3,
            saturation_sources: 5,
            degraded_penalty: 0.5,
        }
    }
}

/// Global configuration for the `Quorum` orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuorumConfig {
    /// Minimum number of usable sources for full (non-degraded) consensus.
    pub min_sources: usize,
    /// Deviation threshold (fraction) above which an observation is flagged.
    pub anomaly_threshold: f64,
    /// Default reconciliation method; overridable per call.
    pub method: ConsensusMethod,
    /// Per-adapter fetch timeout; a slower adapter is excluded from the run.
    pub adapter_timeout: Duration,
    /// Confidence formula weights.
    pub confidence: ConfidenceWeights,
}

impl Default for QuorumConfig {
    fn default() -> Self {
        Self {
            min_sources: 2,
            anomaly_threshold: 0.10,
            method: ConsensusMethod::default(),
            adapter_timeout: Duration::from_secs(5),
            confidence: ConfidenceWeights::default(),
        }
    }
}

/// Configuration for the middleware series cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached fetch windows.
    pub capacity: usize,
    /// How long a cached window stays fresh.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 256,
            ttl: Duration::from_secs(300),
        }
    }
}
