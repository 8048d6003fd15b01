use std::sync::Arc;

use quorum::{ConsensusMethod, ConsensusRequest, Interval, Quorum, SeriesRequest};
use quorum_mock::{MockAdapter, fixtures};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,quorum=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    // Three deterministic providers that mostly agree, except one outlier
    // observation on the second day.
    let start = fixtures::day("2023-01-02");
    let yf = MockAdapter::serving(
        "yf-demo",
        0.9,
        fixtures::series_of_closes(start, &[100.0, 101.0, 102.5, 103.0]),
    );
    let av = MockAdapter::serving(
        "av-demo",
        0.85,
        fixtures::series_of_closes(start, &[100.2, 101.1, 102.4, 103.2]),
    );
    let stale = MockAdapter::serving(
        "stale-demo",
        0.5,
        fixtures::series_of_closes(start, &[100.1, 140.0, 102.6]),
    );

    let engine = Quorum::builder()
        .with_adapter(Arc::new(yf))
        .with_adapter(Arc::new(av))
        .with_adapter(Arc::new(stale))
        .build()?;

    let window = SeriesRequest::new(
        "AAPL",
        start,
        fixtures::day("2023-01-06"),
        Interval::D1,
    )?;

    for method in [ConsensusMethod::WeightedAverage, ConsensusMethod::Median] {
        let result = engine
            .consensus(&ConsensusRequest::new(window.clone()).with_method(method))
            .await;

        println!("== {method} ==");
        println!(
            "outcome: {:?}, sources: {}, confidence: {:.3}",
            result.meta.outcome, result.meta.sources_used, result.confidence
        );
        for bar in result.series.iter() {
            println!(
                "  {}  close {:>8.2}",
                bar.ts.date_naive(),
                bar.close.unwrap_or(f64::NAN)
            );
        }
        for (source, agreement) in &result.source_agreement {
            println!("  agreement {source}: {agreement:.3}");
        }
        for a in &result.anomalies {
            println!(
                "  anomaly: {} at {} deviates {:.1}% ({} vs consensus {:.2})",
                a.source,
                a.ts.date_naive(),
                a.deviation_pct,
                a.source_close,
                a.consensus_close
            );
        }
        println!();
    }

    Ok(())
}
