//! Upstream service contracts
//!
//! The gateway talks to two services it does not own: the listing catalog
//! and the user directory. Both are reached through the traits below so the
//! aggregation engine never depends on the wire encoding.

pub mod envelope;
pub mod http;
pub mod listing_client;
pub mod user_client;

use async_trait::async_trait;
use thiserror::Error;
use types::prelude::*;

pub use listing_client::ListingServiceClient;
pub use user_client::UserServiceClient;

/// Failure talking to an upstream service
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned non-OK status: {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} reported error: {message}")]
    Rejected {
        service: &'static str,
        message: String,
    },
}

/// Result of looking up a single user
///
/// Not-found is a defined outcome, distinct from a failed lookup.
#[derive(Debug)]
pub enum LookupOutcome {
    Found(UserRecord),
    NotFound,
    Failed(String),
}

impl LookupOutcome {
    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            LookupOutcome::Found(user) => Some(user),
            LookupOutcome::NotFound | LookupOutcome::Failed(_) => None,
        }
    }
}

impl From<Result<Option<UserRecord>, SourceError>> for LookupOutcome {
    fn from(result: Result<Option<UserRecord>, SourceError>) -> Self {
        match result {
            Ok(Some(user)) => LookupOutcome::Found(user),
            Ok(None) => LookupOutcome::NotFound,
            Err(e) => LookupOutcome::Failed(e.to_string()),
        }
    }
}

/// The listing catalog
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch one page of listings in catalog order. An empty page is a
    /// successful result.
    async fn list_listings(&self, page: PageRequest) -> Result<Vec<ListingRecord>, SourceError>;

    async fn create_listing(&self, listing: &NewListing) -> Result<ListingRecord, SourceError>;
}

/// The user directory
#[async_trait]
pub trait UserSource: Send + Sync {
    /// `Ok(None)` when the user does not exist.
    async fn get_user(&self, id: UserId) -> Result<Option<UserRecord>, SourceError>;

    async fn create_user(&self, user: &NewUser) -> Result<UserRecord, SourceError>;
}
