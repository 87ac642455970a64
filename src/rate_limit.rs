/// Fixed-window request limiter keyed by client
///
/// Each client gets `limit` requests per window. The window starts at the
/// client's first request and is hard-reset (not decremented) by the first
/// request arriving after it ends, so up to `2 * limit` requests can land
/// in any span of `window` that straddles a reset.
use crate::config::RateLimitConfig;
use crate::logger::{self, LogTag};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

/// Key used when neither a forwarded address nor a peer address is known
pub const UNKNOWN_CLIENT: &str = "unknown";

#[derive(Debug, Clone, Copy)]
struct WindowState {
    count: u32,
    reset_at: Instant,
}

pub struct FixedWindowRateLimiter {
    limit: u32,
    window: Duration,
    clients: Mutex<HashMap<String, WindowState>>,
}

impl FixedWindowRateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_requests, Duration::from_secs(config.window_secs))
    }

    /// Count one request; true when it is within the client's allowance
    pub fn allow(&self, client: &str) -> bool {
        self.check(client).is_ok()
    }

    /// Count one request, or return the time left until the window resets
    pub fn check(&self, client: &str) -> Result<(), Duration> {
        self.check_at(client, Instant::now())
    }

    pub fn check_at(&self, client: &str, now: Instant) -> Result<(), Duration> {
        let mut clients = self.clients.lock();

        let fresh = WindowState {
            count: 0,
            reset_at: now + self.window,
        };
        let state = clients.entry(client.to_string()).or_insert(fresh);
        if now > state.reset_at {
            *state = fresh;
        }

        if state.count >= self.limit {
            let remaining = state.reset_at.saturating_duration_since(now);
            logger::debug(
                LogTag::RateLimit,
                &format!(
                    "Client {} denied ({} requests, resets in {:?})",
                    client, state.count, remaining
                ),
            );
            return Err(remaining);
        }

        state.count += 1;
        Ok(())
    }

    /// Number of clients with a tracked window (expired ones included)
    pub fn tracked_clients(&self) -> usize {
        self.clients.lock().len()
    }

    pub fn status(&self) -> RateLimitStatus {
        RateLimitStatus {
            limit: self.limit,
            window_secs: self.window.as_secs(),
            tracked_clients: self.tracked_clients(),
        }
    }
}

/// Limiter settings and load, reported by the health endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateLimitStatus {
    pub limit: u32,
    pub window_secs: u64,
    pub tracked_clients: usize,
}

/// Whole seconds a rejected client should wait, rounded up and never zero
pub fn retry_after_secs(remaining: Duration) -> u64 {
    let secs = remaining.as_secs();
    let rounded = if remaining.subsec_nanos() > 0 { secs + 1 } else { secs };
    rounded.max(1)
}

/// Derive the limiter key for a request
///
/// Uses the first entry of `X-Forwarded-For` when present and trusted,
/// otherwise the socket peer address.
pub fn client_key(forwarded_for: Option<&str>, peer: Option<IpAddr>) -> String {
    forwarded_for
        .and_then(|header| header.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|ip| ip.to_string()))
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
