use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::aggregation::Aggregator;
use crate::config::GatewayConfig;
use crate::upstream::http::build_client;
use crate::upstream::{ListingServiceClient, ListingSource, UserServiceClient, UserSource};

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub listings: Arc<dyn ListingSource>,
    pub users: Arc<dyn UserSource>,
    /// Deadline for one inbound request, enforced by the router
    pub request_timeout: Duration,
}

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

impl AppState {
    /// Wire the HTTP upstream clients described by `config`.
    pub fn new(config: &GatewayConfig) -> anyhow::Result<Self> {
        let http_client = build_client(config.timeouts()).context("failed to build upstream HTTP client")?;

        let listings: Arc<dyn ListingSource> = Arc::new(ListingServiceClient::new(
            http_client.clone(),
            &config.listing_service_url,
        ));
        let users: Arc<dyn UserSource> =
            Arc::new(UserServiceClient::new(http_client, &config.user_service_url));

        Ok(Self::from_sources(listings, users, config.max_in_flight_lookups.get())
            .with_request_timeout(config.server_timeout()))
    }

    pub fn from_sources(
        listings: Arc<dyn ListingSource>,
        users: Arc<dyn UserSource>,
        max_in_flight: usize,
    ) -> Self {
        Self {
            aggregator: Arc::new(Aggregator::new(
                Arc::clone(&listings),
                Arc::clone(&users),
                max_in_flight,
            )),
            listings,
            users,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
