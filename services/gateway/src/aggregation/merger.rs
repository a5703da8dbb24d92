//! Aggregation merge
//!
//! Walks the original page in order and attaches each listing's owner from
//! the resolved map. Output order comes from this walk alone, never from
//! the order in which lookups completed.

use types::prelude::*;

use super::resolver::Resolved;
use crate::upstream::LookupOutcome;

/// One enriched listing per input listing, same order.
///
/// Owners that were not found, failed, or are missing from `resolved`
/// leave `user` empty. This step cannot fail.
pub fn merge(listings: Vec<ListingRecord>, resolved: &Resolved) -> Vec<EnrichedListing> {
    listings
        .into_iter()
        .map(|listing| {
            let user = resolved
                .get(&listing.user_id)
                .and_then(LookupOutcome::user)
                .cloned();
            EnrichedListing::new(listing, user)
        })
        .collect()
}
