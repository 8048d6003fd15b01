use crate::helpers::{adapter, engine, request};

#[tokio::test]
async fn identical_inputs_reconcile_identically() {
    let q = engine(vec![
        adapter("a", 0.9, &[(1, 100.0), (2, 101.0), (3, 99.5)]),
        adapter("b", 0.85, &[(1, 100.2), (2, 101.3), (3, 99.4)]),
        adapter("c", 0.5, &[(1, 150.0), (3, 99.9)]),
    ]);

    let first = q.consensus(&request()).await;
    let second = q.consensus(&request()).await;

    assert_eq!(first.series, second.series);
    assert_eq!(first.confidence.to_bits(), second.confidence.to_bits());
    assert_eq!(first.source_agreement, second.source_agreement);
    assert_eq!(first.anomalies, second.anomalies);
    assert_eq!(first.meta, second.meta);
}
