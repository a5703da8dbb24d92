use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use types::prelude::*;

use super::envelope::read_envelope;
use super::http::normalize_base_url;
use super::{ListingSource, SourceError};

const SERVICE: &str = "Listing Service";

/// HTTP client for the listing catalog
#[derive(Clone)]
pub struct ListingServiceClient {
    http_client: Client,
    base_url: String,
}

impl ListingServiceClient {
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: normalize_base_url(base_url),
        }
    }

    fn transport(source: reqwest::Error) -> SourceError {
        SourceError::Transport {
            service: SERVICE,
            source,
        }
    }
}

#[async_trait]
impl ListingSource for ListingServiceClient {
    async fn list_listings(&self, page: PageRequest) -> Result<Vec<ListingRecord>, SourceError> {
        let mut query = vec![
            ("page_num", page.page_num.to_string()),
            ("page_size", page.page_size.to_string()),
        ];
        if let Some(user_id) = page.user_id {
            query.push(("user_id", user_id.to_string()));
        }

        debug!(
            page_num = page.page_num,
            page_size = page.page_size,
            user_id = ?page.user_id,
            "Fetching listings page"
        );

        let res = self
            .http_client
            .get(format!("{}/listings", self.base_url))
            .query(&query)
            .send()
            .await
            .map_err(Self::transport)?;

        Ok(read_envelope::<ListingRecord>(SERVICE, res).await?.into_records())
    }

    async fn create_listing(&self, listing: &NewListing) -> Result<ListingRecord, SourceError> {
        let form = [
            ("user_id", listing.user_id().to_string()),
            ("listing_type", listing.listing_type().to_string()),
            ("price", listing.price().to_string()),
        ];

        let res = self
            .http_client
            .post(format!("{}/listings", self.base_url))
            .form(&form)
            .send()
            .await
            .map_err(Self::transport)?;

        read_envelope::<ListingRecord>(SERVICE, res)
            .await?
            .into_record(SERVICE)
    }
}
