//! Error types for record validation
//!
//! Create requests are checked against these rules before anything is sent
//! upstream.

use thiserror::Error;

/// Reasons a create-listing or create-user input is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("User name is required")]
    EmptyName,

    #[error("User ID must be a positive integer, got {0}")]
    InvalidUserId(i64),

    #[error("Listing type must be 'rent' or 'sale', got '{0}'")]
    InvalidListingType(String),

    #[error("Price must be greater than zero, got {0}")]
    InvalidPrice(i64),
}
