//! Listings with their owner embedded

use crate::ids::{ListingId, UserId};
use crate::listing::{ListingRecord, ListingType};
use crate::user::UserRecord;
use serde::{Deserialize, Serialize};

/// A listing plus its owner, when the owner could be resolved
///
/// `user` is `None` when the owner was not found or the lookup failed.
/// It serializes as `null`, never as an empty user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedListing {
    pub id: ListingId,
    pub user_id: UserId,
    pub listing_type: ListingType,
    pub price: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub user: Option<UserRecord>,
}

impl EnrichedListing {
    pub fn new(listing: ListingRecord, user: Option<UserRecord>) -> Self {
        Self {
            id: listing.id,
            user_id: listing.user_id,
            listing_type: listing.listing_type,
            price: listing.price,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
            user,
        }
    }

    pub fn is_enriched(&self) -> bool {
        self.user.is_some()
    }
}
