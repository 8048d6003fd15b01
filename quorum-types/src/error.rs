use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the quorum workspace.
///
/// Adapter-level failures are carried as values so orchestrators can exclude
/// a misbehaving source without aborting the run; nothing in the consensus
/// pipeline panics on bad provider data.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuorumError {
    /// An individual source adapter returned an error.
    #[error("{adapter} failed: {msg}")]
    Adapter {
        /// Adapter name that failed.
        adapter: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual adapter call exceeded the configured timeout.
    #[error("adapter timed out: {adapter}")]
    AdapterTimeout {
        /// Adapter name that timed out.
        adapter: String,
    },

    /// The adapter declined the call via its liveness check.
    #[error("adapter unavailable: {adapter}")]
    Unavailable {
        /// Adapter name that reported itself unavailable.
        adapter: String,
    },

    /// Issues with returned or expected data (malformed bars, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "series for AAPL".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl QuorumError {
    /// Helper: build an `Adapter` error with the adapter name and message.
    pub fn adapter(adapter: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Adapter {
            adapter: adapter.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `AdapterTimeout` error.
    pub fn adapter_timeout(adapter: impl Into<String>) -> Self {
        Self::AdapterTimeout {
            adapter: adapter.into(),
        }
    }

    /// Helper: build an `Unavailable` error.
    pub fn unavailable(adapter: impl Into<String>) -> Self {
        Self::Unavailable {
            adapter: adapter.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }
}
