use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use lru::LruCache;
use quorum_core::{CacheConfig, Interval, QuorumError, Series, SeriesRequest, SourceAdapter};
use tokio::sync::Mutex;

/// Time source for cache expiry decisions.
///
/// Injected rather than read ambiently so expiry is deterministic under
/// test; production code uses [`SystemClock`].
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Identity of a fetch window for caching discrimination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SeriesKey {
    symbol: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    interval: Interval,
}

impl From<&SeriesRequest> for SeriesKey {
    fn from(req: &SeriesRequest) -> Self {
        Self {
            symbol: req.symbol().to_string(),
            start: req.start(),
            end: req.end(),
            interval: req.interval(),
        }
    }
}

struct CachedEntry {
    series: Series,
    inserted_at: DateTime<Utc>,
}

/// Caching wrapper around a source adapter.
///
/// Successful non-empty fetches are kept for `ttl` keyed by the full fetch
/// window; capacity is bounded LRU. Empty series and errors are never
/// cached, so a recovering provider is retried on the next call.
/// Name, reliability, and liveness delegate to the inner adapter.
pub struct CachedAdapter {
    inner: Arc<dyn SourceAdapter>,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
    cache: Mutex<LruCache<SeriesKey, CachedEntry>>,
}

impl CachedAdapter {
    /// Wrap `inner` with a TTL/LRU cache driven by the wall clock.
    #[must_use]
    pub fn new(inner: Arc<dyn SourceAdapter>, cfg: CacheConfig) -> Self {
        Self::with_clock(inner, cfg, Arc::new(SystemClock))
    }

    /// Wrap `inner` with a TTL/LRU cache driven by an injected clock.
    #[must_use]
    pub fn with_clock(
        inner: Arc<dyn SourceAdapter>,
        cfg: CacheConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let capacity = NonZeroUsize::new(cfg.capacity).unwrap_or(NonZeroUsize::MIN);
        let ttl = TimeDelta::from_std(cfg.ttl).unwrap_or(TimeDelta::MAX);
        Self {
            inner,
            ttl,
            clock,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }
}

#[async_trait]
impl SourceAdapter for CachedAdapter {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn reliability(&self) -> f64 {
        self.inner.reliability()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }

    async fn fetch(&self, req: &SeriesRequest) -> Result<Series, QuorumError> {
        let key = SeriesKey::from(req);
        {
            let mut cache = self.cache.lock().await;
            if let Some(entry) = cache.get(&key) {
                if self.clock.now() - entry.inserted_at < self.ttl {
                    return Ok(entry.series.clone());
                }
                cache.pop(&key);
            }
        }
        // Lock released across the inner fetch: a slow provider must not
        // serialize unrelated cache lookups.
        let series = self.inner.fetch(req).await?;
        if !series.is_empty() {
            self.cache.lock().await.put(
                key,
                CachedEntry {
                    series: series.clone(),
                    inserted_at: self.clock.now(),
                },
            );
        }
        Ok(series)
    }
}
