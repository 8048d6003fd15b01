use std::collections::BTreeMap;
use std::sync::Arc;

use quorum_core::{
    align, build_consensus, confidence_score, detect_anomalies, source_agreement, validate_series,
    SourceAdapter,
};
use quorum_types::{
    ConsensusMetadata, ConsensusMethod, ConsensusOutcome, ConsensusRequest, ConsensusResult,
    Series, SeriesRequest, SourceResult,
};

use crate::Quorum;

impl Quorum {
    /// Reconcile one fetch window across every registered adapter.
    ///
    /// Behavior and trade-offs:
    /// - Adapters are consulted concurrently; each call is bounded by the
    ///   configured per-adapter timeout. Unavailable, failing, timed-out,
    ///   and empty-handed adapters are logged and excluded, never fatal.
    /// - Surviving series are validated and kept in the voting pool even
    ///   when invalid; their recorded errors and low quality scores make
    ///   the problem visible instead of hiding the source.
    /// - With one usable source the result falls back to that series at
    ///   penalized confidence; with none, the terminal no-data result is
    ///   returned. Callers always receive a [`ConsensusResult`].
    /// - The method defaults to the builder's configuration and can be
    ///   overridden per call on the request.
    #[tracing::instrument(
        name = "quorum::router::consensus",
        skip(self, req),
        fields(symbol = %req.series().symbol(), interval = %req.series().interval()),
    )]
    pub async fn consensus(&self, req: &ConsensusRequest) -> ConsensusResult {
        let method = req.method().unwrap_or(self.cfg.method);
        let window = req.series();

        let sources = self.collect_sources(window).await;
        tracing::debug!(sources = sources.len(), "collected usable sources");

        if sources.is_empty() {
            return Self::no_data_result(window, method);
        }
        if sources.len() < self.cfg.min_sources {
            return self.fallback_result(window, method, &sources);
        }
        self.reconciled_result(window, method, &sources)
    }

    /// Fetch from every available adapter concurrently, validate what came
    /// back, and pair each usable series with its adapter's weight.
    async fn collect_sources(&self, window: &SeriesRequest) -> Vec<SourceResult> {
        let eligible: Vec<Arc<dyn SourceAdapter>> = self
            .adapters
            .iter()
            .filter(|a| {
                let available = a.is_available();
                if !available {
                    tracing::warn!(adapter = a.name(), "adapter unavailable, skipping");
                }
                available
            })
            .cloned()
            .collect();

        let timeout = self.cfg.adapter_timeout;
        let tasks = eligible.iter().map(|a| {
            let adapter = Arc::clone(a);
            async move {
                let name = adapter.name();
                let fetched =
                    Self::adapter_call_with_timeout(name, timeout, adapter.fetch(window)).await;
                (name, adapter.reliability(), fetched)
            }
        });
        let joined = futures::future::join_all(tasks).await;

        let mut sources = Vec::new();
        for (name, reliability, fetched) in joined {
            match fetched {
                Ok(series) if series.is_empty() => {
                    tracing::debug!(adapter = name, "empty series, skipping");
                }
                Ok(series) => {
                    let validation = validate_series(&series);
                    if !validation.is_valid {
                        tracing::warn!(
                            adapter = name,
                            errors = ?validation.errors,
                            "series failed validation; kept in pool with reduced quality"
                        );
                    }
                    sources.push(SourceResult {
                        source: name.to_string(),
                        series,
                        validation,
                        weight: reliability.clamp(0.0, 1.0),
                    });
                }
                Err(e) => {
                    tracing::warn!(adapter = name, error = %e, "fetch failed, skipping");
                }
            }
        }
        sources
    }

    /// Full pipeline over two or more usable sources.
    fn reconciled_result(
        &self,
        window: &SeriesRequest,
        method: ConsensusMethod,
        sources: &[SourceResult],
    ) -> ConsensusResult {
        let aligned = align(sources);
        let series = build_consensus(sources, &aligned, method);
        let agreement = source_agreement(sources, &series);
        let confidence =
            confidence_score(sources, &agreement, &self.cfg.confidence, self.cfg.min_sources);
        let anomalies = detect_anomalies(sources, &series, self.cfg.anomaly_threshold);

        ConsensusResult {
            series,
            confidence,
            source_agreement: agreement,
            anomalies,
            meta: Self::metadata(
                window,
                method,
                sources.len(),
                ConsensusOutcome::Reconciled,
                None,
            ),
        }
    }

    /// Degraded path: adopt the best of the too-few usable sources.
    fn fallback_result(
        &self,
        window: &SeriesRequest,
        method: ConsensusMethod,
        sources: &[SourceResult],
    ) -> ConsensusResult {
        // First maximal quality wins ties, keeping registration order
        // authoritative.
        let mut best = &sources[0];
        for s in &sources[1..] {
            if s.validation.quality_score > best.validation.quality_score {
                best = s;
            }
        }
        tracing::warn!(
            usable = sources.len(),
            min_sources = self.cfg.min_sources,
            chosen = %best.source,
            "insufficient sources for consensus, falling back to best single source"
        );

        let mut agreement = BTreeMap::new();
        agreement.insert(best.source.clone(), 1.0);
        ConsensusResult {
            series: best.series.clone(),
            confidence: best.validation.quality_score * self.cfg.confidence.degraded_penalty,
            source_agreement: agreement,
            anomalies: vec![],
            meta: Self::metadata(
                window,
                method,
                sources.len(),
                ConsensusOutcome::Fallback,
                Some("insufficient_sources".to_string()),
            ),
        }
    }

    /// Terminal path: nothing usable at all.
    fn no_data_result(window: &SeriesRequest, method: ConsensusMethod) -> ConsensusResult {
        tracing::warn!(symbol = window.symbol(), "no usable sources for consensus");
        ConsensusResult {
            series: Series::empty(),
            confidence: 0.0,
            source_agreement: BTreeMap::new(),
            anomalies: vec![],
            meta: Self::metadata(window, method, 0, ConsensusOutcome::NoData, None),
        }
    }

    fn metadata(
        window: &SeriesRequest,
        method: ConsensusMethod,
        sources_used: usize,
        outcome: ConsensusOutcome,
        fallback_reason: Option<String>,
    ) -> ConsensusMetadata {
        ConsensusMetadata {
            sources_used,
            method,
            symbol: window.symbol().to_string(),
            start: window.start(),
            end: window.end(),
            interval: window.interval(),
            outcome,
            fallback_reason,
        }
    }
}
