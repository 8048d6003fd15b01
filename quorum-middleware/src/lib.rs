//! Middleware wrappers for quorum source adapters.
//!
//! Wrappers implement [`quorum_core::SourceAdapter`] themselves and delegate
//! to an inner adapter, so they compose transparently with the orchestrator.
//! The consensus core stays cache-free: anything stateful lives here, on the
//! adapter side of the boundary.
#![warn(missing_docs)]

mod cache;

pub use cache::{CachedAdapter, Clock, SystemClock};
