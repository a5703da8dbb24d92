//! In-memory upstream services for gateway tests
//!
//! Both fakes record every call so tests can assert on fan-out behaviour.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use gateway::upstream::{ListingSource, SourceError, UserSource};
use reqwest::StatusCode;
use types::prelude::*;

pub fn listing(id: i64, user_id: i64) -> ListingRecord {
    ListingRecord {
        id: ListingId::new(id),
        user_id: UserId::new(user_id),
        listing_type: if id % 2 == 0 { ListingType::Sale } else { ListingType::Rent },
        price: 1_000 * id,
        created_at: 1_700_000_000_000_000 + id,
        updated_at: 1_700_000_000_000_000 + id,
    }
}

pub fn user(id: i64, name: &str) -> UserRecord {
    UserRecord {
        id: UserId::new(id),
        name: name.to_string(),
        created_at: 1_600_000_000_000_000,
        updated_at: 1_600_000_000_000_000,
    }
}

/// How the fake user service answers for one id
#[derive(Debug, Clone)]
pub enum UserReply {
    Found(UserRecord),
    Fail,
}

#[derive(Default)]
pub struct FakeUsers {
    replies: HashMap<UserId, UserReply>,
    delays: HashMap<UserId, Duration>,
    default_delay: Duration,
    calls: Mutex<Vec<UserId>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    created: Mutex<Vec<String>>,
    fail_create: bool,
}

impl FakeUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, record: UserRecord) -> Self {
        self.replies.insert(record.id, UserReply::Found(record));
        self
    }

    pub fn failing(mut self, id: i64) -> Self {
        self.replies.insert(UserId::new(id), UserReply::Fail);
        self
    }

    pub fn with_delay(mut self, id: i64, delay: Duration) -> Self {
        self.delays.insert(UserId::new(id), delay);
        self
    }

    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn calls(&self) -> Vec<UserId> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserSource for FakeUsers {
    async fn get_user(&self, id: UserId) -> Result<Option<UserRecord>, SourceError> {
        self.calls.lock().unwrap().push(id);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self.delays.get(&id).copied().unwrap_or(self.default_delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match self.replies.get(&id) {
            Some(UserReply::Found(record)) => Ok(Some(record.clone())),
            Some(UserReply::Fail) => Err(SourceError::Status {
                service: "User Service",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            }),
            None => Ok(None),
        }
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<UserRecord, SourceError> {
        self.created.lock().unwrap().push(new_user.name().to_string());
        if self.fail_create {
            return Err(SourceError::Rejected {
                service: "User Service",
                message: "Internal server error".to_string(),
            });
        }
        Ok(user(77, new_user.name()))
    }
}

#[derive(Default)]
pub struct FakeListings {
    page: Vec<ListingRecord>,
    unavailable: bool,
    delay: Duration,
    requests: Mutex<Vec<PageRequest>>,
    created: Mutex<Vec<NewListing>>,
}

impl FakeListings {
    pub fn with_page(page: Vec<ListingRecord>) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewListing> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListingSource for FakeListings {
    async fn list_listings(&self, page: PageRequest) -> Result<Vec<ListingRecord>, SourceError> {
        self.requests.lock().unwrap().push(page);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.unavailable {
            return Err(SourceError::Status {
                service: "Listing Service",
                status: StatusCode::SERVICE_UNAVAILABLE,
            });
        }
        Ok(self
            .page
            .iter()
            .filter(|l| page.user_id.is_none_or(|owner| l.user_id == owner))
            .cloned()
            .collect())
    }

    async fn create_listing(&self, new_listing: &NewListing) -> Result<ListingRecord, SourceError> {
        self.created.lock().unwrap().push(new_listing.clone());
        if self.unavailable {
            return Err(SourceError::Status {
                service: "Listing Service",
                status: StatusCode::SERVICE_UNAVAILABLE,
            });
        }
        Ok(ListingRecord {
            id: ListingId::new(500),
            user_id: new_listing.user_id(),
            listing_type: new_listing.listing_type(),
            price: new_listing.price(),
            created_at: 1,
            updated_at: 1,
        })
    }
}
