//! Gateway configuration
//!
//! Every setting can come from a flag or the matching environment variable.

use std::net::SocketAddr;
use std::num::{NonZeroU64, NonZeroUsize};
use std::time::Duration;

use clap::Parser;

use crate::aggregation::DEFAULT_MAX_IN_FLIGHT;
use crate::upstream::http::UpstreamTimeouts;

const DEFAULT_IN_FLIGHT_CAP: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_IN_FLIGHT) {
    Some(cap) => cap,
    None => NonZeroUsize::MIN,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "gateway", about = "Public API gateway for listings and users")]
pub struct GatewayConfig {
    /// Port the public API listens on
    #[arg(long, env = "GATEWAY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Base URL of the user service
    #[arg(long, env = "USER_SERVICE_URL", default_value = "http://localhost:7000")]
    pub user_service_url: String,

    /// Base URL of the listing service
    #[arg(long, env = "LISTING_SERVICE_URL", default_value = "http://localhost:6000")]
    pub listing_service_url: String,

    /// Deadline for handling one inbound request end to end
    #[arg(long, env = "GATEWAY_REQUEST_TIMEOUT_SECS", default_value = "15")]
    pub server_timeout_secs: NonZeroU64,

    /// Overall deadline of a single upstream request
    #[arg(long, env = "UPSTREAM_REQUEST_TIMEOUT_SECS", default_value = "10")]
    pub request_timeout_secs: NonZeroU64,

    /// Connection (and TLS handshake) deadline for upstream calls
    #[arg(long, env = "UPSTREAM_CONNECT_TIMEOUT_SECS", default_value = "5")]
    pub connect_timeout_secs: NonZeroU64,

    /// Read deadline for upstream responses
    #[arg(long, env = "UPSTREAM_READ_TIMEOUT_SECS", default_value = "5")]
    pub read_timeout_secs: NonZeroU64,

    /// Maximum user lookups in flight for one listings page
    #[arg(long, env = "MAX_IN_FLIGHT_LOOKUPS", default_value_t = DEFAULT_IN_FLIGHT_CAP)]
    pub max_in_flight_lookups: NonZeroUsize,
}

impl GatewayConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn server_timeout(&self) -> Duration {
        Duration::from_secs(self.server_timeout_secs.get())
    }

    pub fn timeouts(&self) -> UpstreamTimeouts {
        UpstreamTimeouts {
            request: Duration::from_secs(self.request_timeout_secs.get()),
            connect: Duration::from_secs(self.connect_timeout_secs.get()),
            read: Duration::from_secs(self.read_timeout_secs.get()),
        }
    }
}
