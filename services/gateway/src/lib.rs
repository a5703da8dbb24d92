//! Listings Gateway
//!
//! Public API in front of the listing catalog and the user directory.
//! Listing pages are returned with each listing's owner embedded, resolved
//! through a bounded concurrent fan-out to the user service. Create calls
//! are validated and passed through unchanged.

pub mod aggregation;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod upstream;

pub use router::create_router;
pub use state::AppState;
