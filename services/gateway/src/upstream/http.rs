//! Shared HTTP client for upstream calls
//!
//! Every upstream request carries its own deadline. The aggregation engine
//! never imposes one of its own.

use std::time::Duration;

use reqwest::Client;

/// Transport deadlines applied to every upstream call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    /// Ceiling on the whole request, body included.
    pub request: Duration,
    /// TCP connect plus TLS handshake.
    pub connect: Duration,
    /// Maximum gap between reads, which bounds the wait for response headers.
    pub read: Duration,
}

impl Default for UpstreamTimeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(10),
            connect: Duration::from_secs(5),
            read: Duration::from_secs(5),
        }
    }
}

const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
const POOL_MAX_IDLE_PER_HOST: usize = 100;

pub fn build_client(timeouts: UpstreamTimeouts) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeouts.request)
        .connect_timeout(timeouts.connect)
        .read_timeout(timeouts.read)
        .pool_idle_timeout(POOL_IDLE_TIMEOUT)
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Strip trailing slashes so paths can be appended with `format!`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
