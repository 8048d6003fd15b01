use core::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consensus::ConsensusMethod;
use crate::error::QuorumError;

/// Bar cadence for a fetch window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Interval {
    /// One-minute bars.
    I1m,
    /// Five-minute bars.
    I5m,
    /// Fifteen-minute bars.
    I15m,
    /// Thirty-minute bars.
    I30m,
    /// One-hour bars.
    I1h,
    /// Daily bars.
    #[default]
    D1,
    /// Weekly bars.
    W1,
}

impl Interval {
    /// Canonical wire code for the interval (`"1d"`, `"1h"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1m => "1m",
            Self::I5m => "5m",
            Self::I15m => "15m",
            Self::I30m => "30m",
            Self::I1h => "1h",
            Self::D1 => "1d",
            Self::W1 => "1wk",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = QuorumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Self::I1m),
            "5m" => Ok(Self::I5m),
            "15m" => Ok(Self::I15m),
            "30m" => Ok(Self::I30m),
            "1h" => Ok(Self::I1h),
            "1d" => Ok(Self::D1),
            "1wk" => Ok(Self::W1),
            other => Err(QuorumError::invalid_arg(format!(
                "unknown interval: {other}"
            ))),
        }
    }
}

/// A validated fetch window handed to source adapters.
///
/// Constructed once per request; adapters receive it by reference and must
/// not see anything consensus-specific (method, thresholds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRequest {
    symbol: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    interval: Interval,
}

impl SeriesRequest {
    /// Build a request for `symbol` over `[start, end]` at `interval`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the symbol is empty or `start > end`.
    pub fn new(
        symbol: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: Interval,
    ) -> Result<Self, QuorumError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(QuorumError::invalid_arg("empty symbol"));
        }
        if start > end {
            return Err(QuorumError::invalid_arg(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self {
            symbol,
            start,
            end,
            interval,
        })
    }

    /// Requested symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Inclusive window start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Inclusive window end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Requested bar cadence.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }
}

/// A consensus request: a fetch window plus an optional per-call method
/// override. When `method` is `None` the orchestrator's configured default
/// applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusRequest {
    series: SeriesRequest,
    method: Option<ConsensusMethod>,
}

impl ConsensusRequest {
    /// Wrap a fetch window with no method override.
    #[must_use]
    pub const fn new(series: SeriesRequest) -> Self {
        Self {
            series,
            method: None,
        }
    }

    /// Override the reconciliation method for this call only.
    #[must_use]
    pub const fn with_method(mut self, method: ConsensusMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// The fetch window handed to adapters.
    #[must_use]
    pub const fn series(&self) -> &SeriesRequest {
        &self.series
    }

    /// The per-call method override, if any.
    #[must_use]
    pub const fn method(&self) -> Option<ConsensusMethod> {
        self.method
    }
}

impl From<SeriesRequest> for ConsensusRequest {
    fn from(series: SeriesRequest) -> Self {
        Self::new(series)
    }
}
