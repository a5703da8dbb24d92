//! Types library for the listings gateway
//!
//! Record types shared between the gateway and its upstream contracts.
//! Listings and users are owned by their respective upstream services;
//! everything here is a read-only snapshot of what those services return.
//!
//! # Modules
//! - `ids`: Typed identifiers (ListingId, UserId)
//! - `listing`: Listing records and create-listing input
//! - `user`: User records and create-user input
//! - `enriched`: Listings with an optionally embedded user
//! - `page`: Pagination parameters
//! - `errors`: Validation error taxonomy

pub mod ids;
pub mod listing;
pub mod user;
pub mod enriched;
pub mod page;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::listing::*;
    pub use crate::user::*;
    pub use crate::enriched::*;
    pub use crate::page::*;
    pub use crate::errors::*;
}
