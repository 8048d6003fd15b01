use std::sync::Arc;

use crate::helpers::{engine, request};
use quorum::ConsensusOutcome;
use quorum_mock::MockAdapter;

#[tokio::test]
async fn no_usable_sources_is_a_terminal_result_not_an_error() {
    let q = engine(vec![
        Arc::new(MockAdapter::unavailable("down")),
        Arc::new(MockAdapter::failing("broken", "boom")),
        Arc::new(MockAdapter::serving(
            "dry",
            1.0,
            quorum::Series::empty(),
        )),
    ]);

    let result = q.consensus(&request()).await;

    assert!(result.series.is_empty());
    assert_eq!(result.confidence, 0.0);
    assert!(result.source_agreement.is_empty());
    assert!(result.anomalies.is_empty());
    assert_eq!(result.meta.outcome, ConsensusOutcome::NoData);
    assert!(result.meta.outcome.is_error());
    assert_eq!(result.meta.sources_used, 0);
    assert_eq!(result.meta.fallback_reason, None);
}

#[tokio::test]
async fn metadata_still_describes_the_request() {
    let q = engine(vec![Arc::new(MockAdapter::unavailable("down"))]);
    let req = request();
    let result = q.consensus(&req).await;

    assert_eq!(result.meta.symbol, req.series().symbol());
    assert_eq!(result.meta.interval, req.series().interval());
    assert_eq!(result.meta.start, req.series().start());
    assert_eq!(result.meta.end, req.series().end());
}
