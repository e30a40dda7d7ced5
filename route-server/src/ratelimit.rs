//! Fixed-window rate limiting keyed by client identity.
//!
//! Each client gets a counter that lives for one window. Counters are held
//! in a TTL cache, so a client's window starts at its first request and
//! idle clients are evicted without a sweeper task.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use moka::future::Cache as MokaCache;
use serde::Deserialize;

/// Configuration for the rate limiter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateLimitConfig {
    /// Requests allowed per client per window.
    pub max_requests: u32,

    /// Window length in seconds.
    pub window_secs: u64,

    /// Maximum number of clients tracked at once.
    pub max_clients: u64,

    /// Key clients on the first `X-Forwarded-For` entry instead of the
    /// peer address. Only safe behind a proxy that overwrites the header.
    pub trust_forwarded_for: bool,
}

impl RateLimitConfig {
    /// Returns the window as a Duration.
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window_secs: 60,
            max_clients: 10_000,
            trust_forwarded_for: false,
        }
    }
}

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    /// Request may proceed.
    Allowed { remaining: u32 },
    /// Client has used up its window.
    Limited { retry_after: Duration },
}

/// Per-client request counter.
pub struct RateLimiter {
    counters: MokaCache<String, Arc<AtomicU32>>,
    max_requests: u32,
    window: Duration,
    trust_forwarded_for: bool,
}

impl RateLimiter {
    /// Create a limiter from config.
    pub fn new(config: &RateLimitConfig) -> Self {
        Self::with_window(config.max_requests, config.window(), config.max_clients)
            .trusting_forwarded_for(config.trust_forwarded_for)
    }

    /// Create a limiter with an explicit window length.
    pub fn with_window(max_requests: u32, window: Duration, max_clients: u64) -> Self {
        let counters = MokaCache::builder()
            .time_to_live(window)
            .max_capacity(max_clients)
            .build();

        Self {
            counters,
            max_requests,
            window,
            trust_forwarded_for: false,
        }
    }

    /// Set whether the forwarded-for header identifies the client.
    pub fn trusting_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }

    /// Whether the forwarded-for header identifies the client.
    pub fn trusts_forwarded_for(&self) -> bool {
        self.trust_forwarded_for
    }

    /// Count a request from `client` and decide whether it may proceed.
    pub async fn check(&self, client: &str) -> RateDecision {
        let counter = self
            .counters
            .get_with(client.to_string(), async { Arc::new(AtomicU32::new(0)) })
            .await;

        let used = increment(&counter);
        if used <= self.max_requests {
            RateDecision::Allowed {
                remaining: self.max_requests - used,
            }
        } else {
            RateDecision::Limited {
                retry_after: self.window,
            }
        }
    }
}

/// Bump a counter without wrapping and return the new count.
fn increment(counter: &AtomicU32) -> u32 {
    let bump = |n: u32| Some(n.saturating_add(1));
    let previous = counter
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, bump)
        .unwrap_or_else(|n| n);
    previous.saturating_add(1)
}
