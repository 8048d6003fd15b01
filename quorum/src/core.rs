use std::sync::Arc;

use quorum_core::SourceAdapter;
use quorum_types::{ConfidenceWeights, ConsensusMethod, QuorumConfig, QuorumError};

/// Orchestrator that reconciles one fetch window across registered adapters.
pub struct Quorum {
    pub(crate) adapters: Vec<Arc<dyn SourceAdapter>>,
    pub(crate) cfg: QuorumConfig,
}

impl std::fmt::Debug for Quorum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Quorum")
            .field("adapters", &self.adapters.iter().map(|a| a.name()).collect::<Vec<_>>())
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Quorum` orchestrator with custom configuration.
pub struct QuorumBuilder {
    adapters: Vec<Arc<dyn SourceAdapter>>,
    cfg: QuorumConfig,
}

impl Default for QuorumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuorumBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no adapters; you must register at least one via
    ///   [`with_adapter`](Self::with_adapter).
    /// - Defaults follow the engine's conventions: weighted-average
    ///   consensus, two-source minimum, 10% anomaly threshold, 5s
    ///   per-adapter timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adapters: vec![],
            cfg: QuorumConfig::default(),
        }
    }

    /// Register a source adapter.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is the deterministic processing order for
    ///   validation, voting, and tie-breaks; it does not prioritize one
    ///   adapter's data over another's.
    /// - Duplicates are not deduplicated; avoid registering the same
    ///   adapter twice, or its series votes twice.
    #[must_use]
    pub fn with_adapter(mut self, adapter: Arc<dyn SourceAdapter>) -> Self {
        self.adapters.push(adapter);
        self
    }

    /// Set the minimum number of usable sources for full consensus.
    ///
    /// Behavior and trade-offs:
    /// - Runs with fewer usable sources fall back to the single best one
    ///   with degraded confidence rather than failing.
    /// - Raising this makes the confidence penalty kick in more often; it
    ///   never causes an error result by itself.
    #[must_use]
    pub const fn min_sources(mut self, n: usize) -> Self {
        self.cfg.min_sources = n;
        self
    }

    /// Set the anomaly deviation threshold (fraction, e.g. 0.10 for 10%).
    #[must_use]
    pub const fn anomaly_threshold(mut self, threshold: f64) -> Self {
        self.cfg.anomaly_threshold = threshold;
        self
    }

    /// Select the default reconciliation method.
    ///
    /// Individual calls can still override it via
    /// [`ConsensusRequest::with_method`](quorum_core::ConsensusRequest::with_method).
    #[must_use]
    pub const fn method(mut self, method: ConsensusMethod) -> Self {
        self.cfg.method = method;
        self
    }

    /// Set the per-adapter fetch timeout.
    ///
    /// Behavior and trade-offs:
    /// - Bounds each provider call; a timed-out adapter is excluded from
    ///   the run exactly like an unavailable one.
    /// - There is no overall deadline: worst-case wall clock is one timeout,
    ///   since all fetches run concurrently.
    #[must_use]
    pub const fn adapter_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.adapter_timeout = timeout;
        self
    }

    /// Override the confidence formula weights.
    ///
    /// The defaults are empirical constants; override them when calibrating
    /// confidence against your own provider mix.
    #[must_use]
    pub const fn confidence_weights(mut self, weights: ConfidenceWeights) -> Self {
        self.cfg.confidence = weights;
        self
    }

    /// Build the `Quorum` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no adapters have been registered, if
    /// `min_sources` is zero, or if the anomaly threshold is not a
    /// positive finite number.
    pub fn build(self) -> Result<Quorum, QuorumError> {
        if self.adapters.is_empty() {
            return Err(QuorumError::invalid_arg(
                "no adapters registered; add at least one via with_adapter(...)",
            ));
        }
        if self.cfg.min_sources == 0 {
            return Err(QuorumError::invalid_arg("min_sources must be at least 1"));
        }
        if !self.cfg.anomaly_threshold.is_finite() || self.cfg.anomaly_threshold <= 0.0 {
            return Err(QuorumError::invalid_arg(
                "anomaly_threshold must be a positive fraction",
            ));
        }
        Ok(Quorum {
            adapters: self.adapters,
            cfg: self.cfg,
        })
    }
}

impl Quorum {
    /// Start building a new `Quorum` instance.
    ///
    /// Typical usage chains adapter registration and configuration, e.g.:
    ///
    /// ```rust,ignore
    /// let engine = quorum::Quorum::builder()
    ///     .with_adapter(yf.clone())
    ///     .with_adapter(av.clone())
    ///     .method(quorum::ConsensusMethod::Median)
    ///     .min_sources(2)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> QuorumBuilder {
        QuorumBuilder::new()
    }

    /// Wrap an adapter future with a timeout and standardized timeout error
    /// mapping.
    pub(crate) async fn adapter_call_with_timeout<T, Fut>(
        adapter_name: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, QuorumError>
    where
        Fut: core::future::Future<Output = Result<T, QuorumError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(QuorumError::adapter_timeout(adapter_name)))
    }
}
