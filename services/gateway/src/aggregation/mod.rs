//! Listing aggregation engine
//!
//! Builds an enriched listings page out of two upstream services:
//!
//! ```text
//!   Listing Service page
//!          │
//!     ┌────▼─────┐
//!     │ Extract  │  ← distinct owner ids
//!     └────┬─────┘
//!     ┌────▼─────┐
//!     │ Fan-out  │  ← one concurrent lookup per id
//!     └────┬─────┘
//!     ┌────▼─────┐
//!     │  Merge   │  ← original order, missing owners left empty
//!     └──────────┘
//! ```
//!
//! Two failure domains are kept apart. A failed page fetch fails the whole
//! request. A failed or missing owner only empties that listing's `user`.

pub mod extractor;
pub mod merger;
pub mod resolver;

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use types::prelude::*;
use uuid::Uuid;

use crate::upstream::{ListingSource, SourceError, UserSource};

pub use extractor::{extract_references, ReferenceSet};
pub use merger::merge;
pub use resolver::{FanOutResolver, Resolved, DEFAULT_MAX_IN_FLIGHT};

pub struct Aggregator {
    listings: Arc<dyn ListingSource>,
    resolver: FanOutResolver,
}

impl Aggregator {
    pub fn new(
        listings: Arc<dyn ListingSource>,
        users: Arc<dyn UserSource>,
        max_in_flight: usize,
    ) -> Self {
        Self {
            listings,
            resolver: FanOutResolver::new(users, max_in_flight),
        }
    }

    /// Fetch one page and embed each listing's owner.
    ///
    /// Errors only when the page itself cannot be fetched; in that case no
    /// user lookups are issued.
    pub async fn enriched_page(&self, page: PageRequest) -> Result<Vec<EnrichedListing>, SourceError> {
        let span = info_span!(
            "aggregate_listings",
            aggregation_id = %Uuid::now_v7(),
            page_num = page.page_num,
            page_size = page.page_size,
        );

        async move {
            let listings = self.listings.list_listings(page).await.inspect_err(|e| {
                warn!(error = %e, "Listing page fetch failed");
            })?;

            if listings.is_empty() {
                info!("Empty listings page");
                return Ok(Vec::new());
            }

            let references = extract_references(&listings);
            let resolved = self.resolver.resolve(&references).await;
            let enriched = merge(listings, &resolved);

            info!(
                listings = enriched.len(),
                enriched = enriched.iter().filter(|l| l.is_enriched()).count(),
                "Listings page aggregated"
            );
            Ok(enriched)
        }
        .instrument(span)
        .await
    }
}
