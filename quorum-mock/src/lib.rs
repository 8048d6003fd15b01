//! Deterministic mock [`SourceAdapter`] for tests and demos.
//!
//! Behavior is configured through public fields: canned series, forced
//! failures, artificial latency, availability, and a closure override for
//! anything more elaborate. With no canned series configured, fetches fall
//! back to the per-symbol fixtures in [`fixtures`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use quorum_core::{QuorumError, Series, SeriesRequest, SourceAdapter};

pub mod fixtures;

type FetchFn = dyn Fn(&SeriesRequest) -> Result<Series, QuorumError> + Send + Sync;

/// Configurable in-memory adapter used by integration tests and demos.
pub struct MockAdapter {
    /// Adapter name reported to the orchestrator.
    pub name: &'static str,
    /// Static reliability weight.
    pub reliability: f64,
    /// Liveness flag returned by `is_available`.
    pub available: bool,
    /// Artificial latency applied before answering, to exercise timeouts.
    pub delay: Option<Duration>,
    /// Canned series returned for every fetch, when set.
    pub series: Option<Series>,
    /// Forced failure message; takes precedence over canned data.
    pub fail_msg: Option<&'static str>,
    /// Closure override for per-request behavior.
    pub fetch_fn: Option<Arc<FetchFn>>,
}

impl Default for MockAdapter {
    fn default() -> Self {
        Self {
            name: "quorum-mock",
            reliability: 1.0,
            available: true,
            delay: None,
            series: None,
            fail_msg: None,
            fetch_fn: None,
        }
    }
}

impl MockAdapter {
    /// A healthy adapter with the given name and full reliability.
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// A healthy adapter serving one canned series.
    #[must_use]
    pub fn serving(name: &'static str, reliability: f64, series: Series) -> Self {
        Self {
            name,
            reliability,
            series: Some(series),
            ..Self::default()
        }
    }

    /// An adapter whose every fetch fails.
    #[must_use]
    pub fn failing(name: &'static str, msg: &'static str) -> Self {
        Self {
            name,
            fail_msg: Some(msg),
            ..Self::default()
        }
    }

    /// An adapter whose liveness check reports false.
    #[must_use]
    pub fn unavailable(name: &'static str) -> Self {
        Self {
            name,
            available: false,
            ..Self::default()
        }
    }

    /// Add artificial latency before each answer.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the reliability weight.
    #[must_use]
    pub const fn with_reliability(mut self, reliability: f64) -> Self {
        self.reliability = reliability;
        self
    }
}

#[async_trait]
impl SourceAdapter for MockAdapter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn reliability(&self) -> f64 {
        self.reliability
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn fetch(&self, req: &SeriesRequest) -> Result<Series, QuorumError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(msg) = self.fail_msg {
            return Err(QuorumError::adapter(self.name, msg));
        }
        if let Some(f) = &self.fetch_fn {
            return f(req);
        }
        if let Some(series) = &self.series {
            return Ok(series.clone());
        }
        Ok(fixtures::by_symbol(req.symbol()).unwrap_or_else(Series::empty))
    }
}
