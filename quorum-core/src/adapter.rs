use async_trait::async_trait;

use crate::types::{AdapterKey, QuorumError, Series, SeriesRequest};

/// Capability contract a source adapter must satisfy.
///
/// The consensus core depends only on this trait, never on concrete provider
/// types, so adapters can be added or mocked freely. Implementations own
/// everything provider-specific: HTTP calls, rate limiting, response parsing,
/// and any caching. The orchestrator treats each call as a pure function of
/// the request.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Stable, unique adapter name used in reports and logs.
    fn name(&self) -> &'static str;

    /// Typed key for this adapter, derived from [`name`](Self::name).
    fn key(&self) -> AdapterKey {
        AdapterKey::new(self.name())
    }

    /// Static, configured reliability weight in `[0, 1]` representing the
    /// long-run trustworthiness of this provider. Used as the source's vote
    /// weight under weighted consensus; independent of any single fetch.
    fn reliability(&self) -> f64;

    /// Cheap liveness/rate-limit check, consulted before fetching. An
    /// adapter returning `false` is skipped for the run without being
    /// treated as a failure.
    fn is_available(&self) -> bool {
        true
    }

    /// Fetch a series of bars for the request window.
    ///
    /// Returning an empty [`Series`] is the normal signal for "no data";
    /// the orchestrator additionally guards against errors and timeouts, so
    /// either outcome only excludes this adapter from the run.
    ///
    /// # Errors
    /// Returns a [`QuorumError`] on provider failure; never panics.
    async fn fetch(&self, req: &SeriesRequest) -> Result<Series, QuorumError>;
}
