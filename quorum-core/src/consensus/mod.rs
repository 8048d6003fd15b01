//! Multi-source consensus over aligned OHLCV series.
//!
//! Modules include:
//! - `align`: reindex N source series onto the union of their timestamps
//! - `engine`: reconcile aligned observations under a selectable method
//! - `confidence`: score how much to trust the reconciled series
//! - `anomaly`: flag per-source observations that disagree with consensus

/// Union-of-timestamps alignment with explicit missing positions.
pub mod align;
/// Per-source deviation flagging against the consensus closes.
pub mod anomaly;
/// Agreement correlation and the combined confidence score.
pub mod confidence;
/// Reconciliation methods over aligned series.
pub mod engine;
