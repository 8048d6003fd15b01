//! Re-export of foundational types from `quorum-types`.
// Consolidated re-exports so downstream crates can depend on `quorum-core` only

pub use quorum_types::{
    AdapterKey, AnomalyKind, AnomalyRecord, Bar, BarField, CacheConfig, ConfidenceWeights,
    ConsensusMetadata, ConsensusMethod, ConsensusOutcome, ConsensusRequest, ConsensusResult,
    Interval, QualityLevel, QuorumConfig, QuorumError, Series, SeriesRequest, SourceResult,
    ValidationMeta, ValidationResult,
};
