//! Pagination parameters for listing pages

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_NUM: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Which page of listings to fetch
///
/// Page numbers start at 1. An optional owner filter narrows the page to
/// listings of a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page_num: u64,
    pub page_size: u64,
    pub user_id: Option<UserId>,
}

impl PageRequest {
    pub fn new(page_num: u64, page_size: u64) -> Self {
        Self {
            page_num: page_num.max(1),
            page_size: page_size.max(1),
            user_id: None,
        }
    }

    /// Build from raw query values.
    ///
    /// Missing, non-numeric or zero values fall back to the defaults
    /// instead of failing the request.
    pub fn from_raw(page_num: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            page_num: parse_positive(page_num).unwrap_or(DEFAULT_PAGE_NUM),
            page_size: parse_positive(page_size).unwrap_or(DEFAULT_PAGE_SIZE),
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUM, DEFAULT_PAGE_SIZE)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|v| *v >= 1)
}
