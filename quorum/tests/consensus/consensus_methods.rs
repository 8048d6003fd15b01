use std::sync::Arc;

use crate::helpers::{adapter, request, series_of, ts};
use quorum::{ConsensusMethod, Quorum};
use quorum_mock::MockAdapter;

fn trio() -> Vec<Arc<dyn quorum::SourceAdapter>> {
    vec![
        adapter("a", 1.0, &[(1, 100.0)]),
        adapter("b", 1.0, &[(1, 100.5)]),
        adapter("c", 1.0, &[(1, 200.0)]),
    ]
}

fn engine_with_method(method: ConsensusMethod) -> Quorum {
    let mut b = Quorum::builder().method(method);
    for a in trio() {
        b = b.with_adapter(a);
    }
    b.build().unwrap()
}

#[tokio::test]
async fn configured_default_method_applies() {
    let q = engine_with_method(ConsensusMethod::Median);
    let result = q.consensus(&request()).await;
    assert_eq!(result.meta.method, ConsensusMethod::Median);
    assert!((result.series.close_at(ts(1)).unwrap() - 100.5).abs() < 1e-9);
}

#[tokio::test]
async fn per_call_override_beats_the_default() {
    let q = engine_with_method(ConsensusMethod::WeightedAverage);

    let median = q
        .consensus(&request().with_method(ConsensusMethod::Median))
        .await;
    assert_eq!(median.meta.method, ConsensusMethod::Median);
    assert!((median.series.close_at(ts(1)).unwrap() - 100.5).abs() < 1e-9);

    // The default still applies when no override is given.
    let weighted = q.consensus(&request()).await;
    assert_eq!(weighted.meta.method, ConsensusMethod::WeightedAverage);
    assert!((weighted.series.close_at(ts(1)).unwrap() - 133.5).abs() < 1e-9);
}

#[tokio::test]
async fn majority_reconciles_like_median() {
    let q = engine_with_method(ConsensusMethod::WeightedAverage);
    let median = q
        .consensus(&request().with_method(ConsensusMethod::Median))
        .await;
    let majority = q
        .consensus(&request().with_method(ConsensusMethod::Majority))
        .await;
    assert_eq!(median.series, majority.series);
    assert_eq!(majority.meta.method, ConsensusMethod::Majority);
}

#[tokio::test]
async fn highest_quality_adopts_one_source_wholesale() {
    let clean = series_of(&[(1, 100.0), (2, 101.0), (3, 102.0)]);
    let q = Quorum::builder()
        .with_adapter(Arc::new(MockAdapter::serving(
            "dirty",
            1.0,
            series_of(&[(1, 90.0), (2, -1.0), (3, 95.0)]),
        )))
        .with_adapter(Arc::new(MockAdapter::serving("clean", 0.5, clean.clone())))
        .build()
        .unwrap();

    let result = q
        .consensus(&request().with_method(ConsensusMethod::HighestQuality))
        .await;

    assert_eq!(result.series, clean);
    assert_eq!(result.meta.method, ConsensusMethod::HighestQuality);
}

#[tokio::test]
async fn median_and_weighted_disagree_in_the_presence_of_an_outlier() {
    let q = engine_with_method(ConsensusMethod::WeightedAverage);

    let weighted = q.consensus(&request()).await;
    let median = q
        .consensus(&request().with_method(ConsensusMethod::Median))
        .await;

    let pair_mid = 100.25;
    let w = weighted.series.close_at(ts(1)).unwrap();
    let m = median.series.close_at(ts(1)).unwrap();
    assert!((m - pair_mid).abs() < (w - pair_mid).abs());
}
