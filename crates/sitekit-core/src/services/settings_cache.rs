//! Time-boxed cache for the global site settings.
//!
//! Serves the last fetched settings while they are younger than the
//! freshness window, refreshes them from the content API otherwise, and
//! falls back to the last good value when a refresh fails.
//!
//! # Concurrency Model
//!
//! - The cached `(payload, fetched_at)` pair is one immutable [`CacheEntry`]
//!   behind a sync `RwLock`, swapped wholesale. The lock is never held
//!   across an await.
//! - Refreshes are single-flight: a tokio `Mutex` serialises fetch attempts
//!   and an attempt counter lets callers that queued behind an attempt reuse
//!   its outcome instead of fetching again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::sync::Mutex;

use crate::domain::GlobalSettings;
use crate::ports::{Clock, ContentApiPort};

/// How long a successful fetch is served without asking the CMS again.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(60);

/// The last successful fetch.
#[derive(Debug)]
struct CacheEntry {
    payload: Arc<GlobalSettings>,
    fetched_at_ms: u64,
}

/// Process-wide cache in front of [`ContentApiPort::fetch_global_settings`].
///
/// Construct one at the composition root and share it with `Arc`.
pub struct SettingsCache {
    fetcher: Arc<dyn ContentApiPort>,
    clock: Arc<dyn Clock>,
    freshness_window_ms: u64,
    state: RwLock<Option<Arc<CacheEntry>>>,
    refresh: Mutex<()>,
    /// Completed fetch attempts, successful or not.
    attempts: AtomicU64,
}

impl SettingsCache {
    /// Create an empty cache with the default [`FRESHNESS_WINDOW`].
    pub fn new(fetcher: Arc<dyn ContentApiPort>, clock: Arc<dyn Clock>) -> Self {
        Self {
            fetcher,
            clock,
            freshness_window_ms: duration_millis(FRESHNESS_WINDOW),
            state: RwLock::new(None),
            refresh: Mutex::new(()),
            attempts: AtomicU64::new(0),
        }
    }

    /// Override the freshness window.
    #[must_use]
    pub fn with_freshness_window(mut self, window: Duration) -> Self {
        self.freshness_window_ms = duration_millis(window);
        self
    }

    /// The configured freshness window.
    pub const fn freshness_window(&self) -> Duration {
        Duration::from_millis(self.freshness_window_ms)
    }

    /// Read the global settings.
    ///
    /// Returns the cached payload while fresh. Otherwise fetches; on failure
    /// returns the stale payload if there is one, or `None` if nothing was
    /// ever fetched. Fetch errors are logged, never returned.
    pub async fn get(&self) -> Option<Arc<GlobalSettings>> {
        let observed_attempts = self.attempts.load(Ordering::Acquire);

        if let Some(payload) = self.fresh_payload() {
            tracing::debug!("Global settings served from cache");
            return Some(payload);
        }

        let _refresh = self.refresh.lock().await;

        if self.attempts.load(Ordering::Acquire) != observed_attempts {
            // An attempt finished while we queued; its outcome is ours.
            return self.snapshot().map(|entry| Arc::clone(&entry.payload));
        }

        let outcome = match self.fetcher.fetch_global_settings().await {
            Ok(settings) => {
                let entry = Arc::new(CacheEntry {
                    payload: Arc::new(settings),
                    fetched_at_ms: self.clock.now_millis(),
                });
                tracing::debug!(
                    fetched_at_ms = entry.fetched_at_ms,
                    "Global settings refreshed"
                );
                self.store(Arc::clone(&entry));
                Some(Arc::clone(&entry.payload))
            }
            Err(err) => {
                let stale = self.snapshot();
                tracing::warn!(
                    error = %err,
                    serving_stale = stale.is_some(),
                    "Failed to fetch global settings"
                );
                stale.map(|entry| Arc::clone(&entry.payload))
            }
        };

        self.attempts.fetch_add(1, Ordering::Release);
        outcome
    }

    fn fresh_payload(&self) -> Option<Arc<GlobalSettings>> {
        let entry = self.snapshot()?;
        let age_ms = self.clock.now_millis().saturating_sub(entry.fetched_at_ms);
        (age_ms < self.freshness_window_ms).then(|| Arc::clone(&entry.payload))
    }

    fn snapshot(&self) -> Option<Arc<CacheEntry>> {
        // Entries are swapped whole, so a poisoned lock still holds a valid one.
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, entry: Arc<CacheEntry>) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = Some(entry);
    }

    #[cfg(test)]
    fn fetched_at_millis(&self) -> Option<u64> {
        self.snapshot().map(|entry| entry.fetched_at_ms)
    }
}

impl std::fmt::Debug for SettingsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsCache")
            .field("freshness_window_ms", &self.freshness_window_ms)
            .field("entry", &self.snapshot())
            .finish_non_exhaustive()
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
