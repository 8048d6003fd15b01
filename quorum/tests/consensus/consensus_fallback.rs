use std::sync::Arc;

use crate::helpers::{adapter, engine, request, series_of};
use quorum::ConsensusOutcome;
use quorum_mock::MockAdapter;

#[tokio::test]
async fn single_source_passes_through_with_degraded_confidence() {
    let series = series_of(&[(1, 100.0), (2, 101.0)]);
    let q = engine(vec![Arc::new(MockAdapter::serving(
        "solo",
        0.9,
        series.clone(),
    ))]);

    let result = q.consensus(&request()).await;

    assert_eq!(result.series, series);
    assert_eq!(result.meta.outcome, ConsensusOutcome::Fallback);
    assert!(result.meta.outcome.is_fallback());
    assert_eq!(
        result.meta.fallback_reason.as_deref(),
        Some("insufficient_sources")
    );
    // Clean series scores quality 1.0; fallback halves it.
    assert!((result.confidence - 0.5).abs() < 1e-9);
    assert_eq!(result.source_agreement.len(), 1);
    assert_eq!(result.source_agreement["solo"], 1.0);
    assert!(result.anomalies.is_empty());
    assert_eq!(result.meta.sources_used, 1);
}

#[tokio::test]
async fn fallback_confidence_scales_with_source_quality() {
    // A series with a non-positive close: invalid prices (-0.4) plus the
    // extreme-return warning (-0.1) leave quality at 0.5.
    let q = engine(vec![Arc::new(MockAdapter::serving(
        "shaky",
        0.9,
        series_of(&[(1, 100.0), (2, -5.0), (3, 100.0)]),
    ))]);

    let result = q.consensus(&request()).await;
    assert_eq!(result.meta.outcome, ConsensusOutcome::Fallback);
    assert!((result.confidence - 0.25).abs() < 1e-9);
}

#[tokio::test]
async fn fallback_picks_the_best_of_too_few_sources() {
    // min_sources raised to 3: two usable sources still degrade, and the
    // cleaner one wins.
    let q = {
        let mut b = quorum::Quorum::builder().min_sources(3);
        b = b.with_adapter(adapter("clean", 0.5, &[(1, 100.0), (2, 101.0)]));
        b = b.with_adapter(Arc::new(MockAdapter::serving(
            "dirty",
            0.9,
            series_of(&[(1, 100.0), (2, -5.0)]),
        )));
        b.build().unwrap()
    };

    let result = q.consensus(&request()).await;
    assert_eq!(result.meta.outcome, ConsensusOutcome::Fallback);
    assert_eq!(result.meta.sources_used, 2);
    assert_eq!(result.source_agreement.len(), 1);
    assert!(result.source_agreement.contains_key("clean"));
}

#[tokio::test]
async fn one_good_source_among_failures_degrades_gracefully() {
    let q = engine(vec![
        Arc::new(MockAdapter::failing("broken", "connection refused")),
        adapter("healthy", 1.0, &[(1, 100.0), (2, 101.0)]),
    ]);

    let result = q.consensus(&request()).await;
    assert_eq!(result.meta.outcome, ConsensusOutcome::Fallback);
    assert_eq!(result.meta.sources_used, 1);
    assert!(result.source_agreement.contains_key("healthy"));
}
