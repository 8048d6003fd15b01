use crate::helpers::{adapter, engine, request, ts};
use quorum::{ConsensusMethod, ConsensusOutcome};

#[tokio::test]
async fn reconciles_three_sources_by_reliability_weight() {
    let q = engine(vec![
        adapter("a", 0.9, &[(1, 100.0)]),
        adapter("b", 0.85, &[(1, 101.0)]),
        adapter("c", 0.5, &[(1, 150.0)]),
    ]);

    let result = q.consensus(&request()).await;

    let close = result.series.close_at(ts(1)).unwrap();
    assert!(((close * 100.0).round() / 100.0 - 111.49).abs() < 1e-9);

    assert_eq!(result.meta.outcome, ConsensusOutcome::Reconciled);
    assert!(!result.meta.outcome.is_fallback());
    assert!(!result.meta.outcome.is_error());
    assert_eq!(result.meta.sources_used, 3);
    assert_eq!(result.meta.method, ConsensusMethod::WeightedAverage);
    assert_eq!(result.meta.symbol, "AAPL");
    assert_eq!(result.source_agreement.len(), 3);
}

#[tokio::test]
async fn confidence_reflects_count_quality_and_agreement() {
    let q = engine(vec![
        adapter("a", 0.9, &[(1, 100.0)]),
        adapter("b", 0.85, &[(1, 101.0)]),
        adapter("c", 0.5, &[(1, 150.0)]),
    ]);

    let result = q.consensus(&request()).await;

    // Clean single-bar series: quality 1.0 each. One shared timestamp
    // leaves every correlation undefined, so agreement contributes 0.
    // 0.3 * (3/5) + 0.4 * 1.0 + 0.3 * 0.0 = 0.58
    assert!((result.confidence - 0.58).abs() < 1e-9);
    assert!(result.source_agreement.values().all(|&r| r == 0.0));
}

#[tokio::test]
async fn volumes_reconcile_like_prices() {
    let q = engine(vec![
        adapter("a", 1.0, &[(1, 100.0)]),
        adapter("b", 1.0, &[(1, 200.0)]),
    ]);

    let result = q.consensus(&request()).await;
    let bar = result.series.bar_at(ts(1)).unwrap();
    assert_eq!(bar.close, Some(150.0));
    // Flat fixture bars carry volume 1000 each.
    assert_eq!(bar.volume, Some(1000.0));
    assert_eq!(bar.open, Some(150.0));
}
