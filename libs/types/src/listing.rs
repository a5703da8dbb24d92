//! Listing records as served by the listing service

use crate::errors::ValidationError;
use crate::ids::{ListingId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Listing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Rent,
    Sale,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Rent => "rent",
            ListingType::Sale => "sale",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rent" => Ok(ListingType::Rent),
            "sale" => Ok(ListingType::Sale),
            other => Err(ValidationError::InvalidListingType(other.to_string())),
        }
    }
}

/// A listing snapshot
///
/// `price` is in the smallest currency unit. Timestamps are microseconds
/// since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: ListingId,
    pub user_id: UserId,
    pub listing_type: ListingType,
    pub price: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Validated input for creating a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    user_id: UserId,
    listing_type: ListingType,
    price: i64,
}

impl NewListing {
    /// Validate raw create-listing fields.
    ///
    /// The owner must be a positive id, the type one of `rent`/`sale`,
    /// and the price strictly positive.
    pub fn new(user_id: i64, listing_type: &str, price: i64) -> Result<Self, ValidationError> {
        let user_id = UserId::new(user_id);
        if !user_id.is_valid() {
            return Err(ValidationError::InvalidUserId(user_id.get()));
        }
        let listing_type = listing_type.parse::<ListingType>()?;
        if price <= 0 {
            return Err(ValidationError::InvalidPrice(price));
        }
        Ok(Self {
            user_id,
            listing_type,
            price,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn listing_type(&self) -> ListingType {
        self.listing_type
    }

    pub fn price(&self) -> i64 {
        self.price
    }
}
