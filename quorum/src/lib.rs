//! Quorum reconciles OHLCV history across multiple market data providers.
//!
//! Overview
//! - Fans a fetch window out to every registered [`SourceAdapter`],
//!   concurrently and with a per-adapter timeout.
//! - Validates each returned series and scores its quality; invalid sources
//!   stay in the voting pool with their problems on record rather than
//!   being dropped silently.
//! - Aligns the surviving series onto the union of their timestamps and
//!   reconciles them under a selectable [`ConsensusMethod`].
//! - Scores overall confidence from source count, quality, and per-source
//!   agreement with the consensus, and flags observations that deviate
//!   beyond the anomaly threshold.
//!
//! Key behaviors and trade-offs
//! - The orchestrator is infallible by contract: callers always receive a
//!   [`ConsensusResult`]; source loss degrades `confidence` and
//!   `meta.outcome` instead of raising.
//! - A slow adapter is bounded by `adapter_timeout` and excluded from the
//!   run; there are no retries here, backoff belongs to the adapter layer.
//! - One usable source short-circuits to a fallback result with the
//!   degraded-confidence penalty applied; zero usable sources produce the
//!   terminal no-data result.
//! - Each call is a pure function of its inputs: no shared state, no
//!   caching (the middleware crate offers a cached adapter wrapper when a
//!   provider should be memoized).
//!
//! Examples
//! Building an engine over two adapters and requesting consensus:
//! ```rust,ignore
//! use std::sync::Arc;
//! use quorum::{ConsensusRequest, Interval, Quorum, SeriesRequest};
//!
//! let engine = Quorum::builder()
//!     .with_adapter(Arc::new(yf))
//!     .with_adapter(Arc::new(av))
//!     .build()?;
//!
//! let window = SeriesRequest::new("AAPL", start, end, Interval::D1)?;
//! let result = engine.consensus(&ConsensusRequest::new(window)).await;
//! println!(
//!     "{} bars, confidence {:.2}, {} anomalies",
//!     result.series.len(),
//!     result.confidence,
//!     result.anomalies.len()
//! );
//! ```
//!
//! See `quorum/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Quorum, QuorumBuilder};

pub use quorum_middleware::{CachedAdapter, Clock, SystemClock};

// Re-export core types for convenience
pub use quorum_core::{
    // Foundational types
    AdapterKey,
    AnomalyKind,
    AnomalyRecord,
    Bar,
    BarField,
    CacheConfig,
    ConfidenceWeights,
    ConsensusMetadata,
    ConsensusMethod,
    ConsensusOutcome,
    // Request types
    ConsensusRequest,
    // Result types
    ConsensusResult,
    Interval,
    QualityLevel,
    QuorumConfig,
    QuorumError,
    Series,
    SeriesRequest,
    SourceAdapter,
    SourceResult,
    ValidationMeta,
    ValidationResult,
};
