use serde::{Deserialize, Serialize};
use types::prelude::*;

/// Raw query of `GET /public-api/listings`
///
/// Kept as strings so bad paging values can fall back to defaults instead
/// of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingsQuery {
    pub page_num: Option<String>,
    pub page_size: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub result: bool,
    pub listings: Vec<EnrichedListing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListingsResponse {
    pub fn success(listings: Vec<EnrichedListing>) -> Self {
        Self {
            result: true,
            listings,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            result: false,
            listings: Vec::new(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateListingRequest {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub listing_type: String,
    #[serde(default)]
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub listing: ListingRecord,
}
