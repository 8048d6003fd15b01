//! quorum-core
//!
//! The adapter contract and the pure consensus pipeline shared across the
//! quorum ecosystem.
//!
//! - `adapter`: the [`SourceAdapter`] trait concrete providers implement.
//! - `validate`: per-source data-quality scoring.
//! - `consensus`: alignment, reconciliation methods, confidence scoring,
//!   and anomaly detection over aligned multi-source series.
//!
//! Every pipeline stage is a pure function over immutable inputs: the same
//! inputs always reconcile to the bit-identical output, and nothing here
//! performs I/O or caches across calls. The only async surface is the
//! [`SourceAdapter::fetch`] contract itself, which assumes a Tokio runtime
//! at the orchestrator level.
#![warn(missing_docs)]

/// The `SourceAdapter` trait implemented by concrete providers.
pub mod adapter;
/// Alignment, reconciliation, confidence, and anomaly detection.
pub mod consensus;
pub mod types;
/// Per-source series quality validation.
pub mod validate;

pub use adapter::SourceAdapter;
pub use consensus::align::{AlignedColumn, Alignment, align};
pub use consensus::anomaly::detect_anomalies;
pub use consensus::confidence::{confidence_score, pearson, source_agreement};
pub use consensus::engine::build_consensus;
pub use types::*;
pub use validate::validate_series;
