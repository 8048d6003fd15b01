use std::sync::Arc;

use crate::helpers::{adapter, engine, request, series_of, ts};
use quorum::ConsensusOutcome;
use quorum_mock::MockAdapter;

#[tokio::test]
async fn unavailable_and_failing_adapters_do_not_poison_the_run() {
    let q = engine(vec![
        Arc::new(MockAdapter::unavailable("down")),
        adapter("a", 1.0, &[(1, 100.0)]),
        Arc::new(MockAdapter::failing("broken", "boom")),
        adapter("b", 1.0, &[(1, 102.0)]),
    ]);

    let result = q.consensus(&request()).await;

    assert_eq!(result.meta.outcome, ConsensusOutcome::Reconciled);
    assert_eq!(result.meta.sources_used, 2);
    assert!((result.series.close_at(ts(1)).unwrap() - 101.0).abs() < 1e-9);
    assert!(!result.source_agreement.contains_key("down"));
    assert!(!result.source_agreement.contains_key("broken"));
}

#[tokio::test]
async fn empty_series_is_skipped_like_a_failure() {
    let q = engine(vec![
        Arc::new(MockAdapter::serving("dry", 1.0, quorum::Series::empty())),
        adapter("a", 1.0, &[(1, 100.0)]),
        adapter("b", 1.0, &[(1, 102.0)]),
    ]);

    let result = q.consensus(&request()).await;
    assert_eq!(result.meta.sources_used, 2);
    assert!(!result.source_agreement.contains_key("dry"));
}

#[tokio::test]
async fn invalid_sources_stay_in_the_voting_pool() {
    // One source carries a non-positive close: it fails validation but is
    // never dropped silently, so it still votes and shows up in the
    // agreement map with its problems priced into confidence.
    let q = engine(vec![
        adapter("clean", 1.0, &[(1, 100.0), (2, 101.0)]),
        Arc::new(MockAdapter::serving(
            "dirty",
            1.0,
            series_of(&[(1, 100.0), (2, -5.0)]),
        )),
    ]);

    let result = q.consensus(&request()).await;

    assert_eq!(result.meta.outcome, ConsensusOutcome::Reconciled);
    assert_eq!(result.meta.sources_used, 2);
    assert!(result.source_agreement.contains_key("dirty"));
    // The dirty close still moved the consensus at t=2.
    assert!((result.series.close_at(ts(2)).unwrap() - 48.0).abs() < 1e-9);
}

#[tokio::test]
async fn reliability_weights_are_clamped_into_the_unit_range() {
    // An adapter misreporting a weight above 1.0 must not dominate beyond
    // full reliability.
    let q = engine(vec![
        adapter("loud", 5.0, &[(1, 100.0)]),
        adapter("quiet", 1.0, &[(1, 200.0)]),
    ]);

    let result = q.consensus(&request()).await;
    // Clamped to 1.0 vs 1.0: plain mean, not a 5:1 blend.
    assert!((result.series.close_at(ts(1)).unwrap() - 150.0).abs() < 1e-9);
}
