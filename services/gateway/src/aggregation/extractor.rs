//! Reference extraction
//!
//! Collapses the owners of a page of listings into the distinct set of user
//! ids that need resolving.

use std::collections::BTreeSet;

use types::prelude::*;

/// Distinct user ids referenced by one page
pub type ReferenceSet = BTreeSet<UserId>;

pub fn extract_references(listings: &[ListingRecord]) -> ReferenceSet {
    listings.iter().map(|listing| listing.user_id).collect()
}
