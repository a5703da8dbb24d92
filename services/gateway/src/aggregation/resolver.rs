//! Fan-out user resolution
//!
//! One tokio task per distinct user id. Tasks write their outcome into a
//! shared concurrent map; the caller waits for every task before reading
//! it back. A slow or failing lookup never cancels its siblings.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};
use types::ids::UserId;

use super::extractor::ReferenceSet;
use crate::upstream::{LookupOutcome, UserSource};

/// Outcome of every lookup, keyed by user id
pub type Resolved = HashMap<UserId, LookupOutcome>;

pub const DEFAULT_MAX_IN_FLIGHT: usize = 16;

pub struct FanOutResolver {
    users: Arc<dyn UserSource>,
    /// Upper bound on lookups running at the same time.
    max_in_flight: usize,
}

impl FanOutResolver {
    pub fn new(users: Arc<dyn UserSource>, max_in_flight: usize) -> Self {
        Self {
            users,
            max_in_flight: max_in_flight.max(1),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Look up every reference and return exactly one outcome per id.
    pub async fn resolve(&self, references: &ReferenceSet) -> Resolved {
        if references.is_empty() {
            return Resolved::new();
        }

        let outcomes: Arc<DashMap<UserId, LookupOutcome>> =
            Arc::new(DashMap::with_capacity(references.len()));
        let permits = Arc::new(Semaphore::new(self.max_in_flight));

        let tasks = references.iter().map(|&user_id| {
            let users = Arc::clone(&self.users);
            let outcomes = Arc::clone(&outcomes);
            let permits = Arc::clone(&permits);

            let handle = tokio::spawn(async move {
                let outcome = match permits.acquire().await {
                    Ok(_permit) => LookupOutcome::from(users.get_user(user_id).await),
                    Err(closed) => LookupOutcome::Failed(closed.to_string()),
                };

                match &outcome {
                    LookupOutcome::Found(_) => {}
                    LookupOutcome::NotFound => {
                        debug!(user_id = %user_id, "User not found");
                    }
                    LookupOutcome::Failed(cause) => {
                        warn!(user_id = %user_id, error = %cause, "User lookup failed");
                    }
                }

                outcomes.insert(user_id, outcome);
            });

            async move { (user_id, handle.await) }
        });

        // Barrier: every lookup has finished or died past this point
        for (user_id, joined) in join_all(tasks).await {
            if let Err(e) = joined {
                warn!(user_id = %user_id, error = %e, "User lookup task aborted");
                outcomes
                    .entry(user_id)
                    .or_insert_with(|| LookupOutcome::Failed(format!("lookup task aborted: {e}")));
            }
        }

        let resolved: Resolved = references
            .iter()
            .map(|user_id| {
                let outcome = outcomes
                    .remove(user_id)
                    .map(|(_, outcome)| outcome)
                    .unwrap_or_else(|| LookupOutcome::Failed("lookup produced no outcome".to_string()));
                (*user_id, outcome)
            })
            .collect();

        let (mut found, mut not_found, mut failed) = (0usize, 0usize, 0usize);
        for outcome in resolved.values() {
            match outcome {
                LookupOutcome::Found(_) => found += 1,
                LookupOutcome::NotFound => not_found += 1,
                LookupOutcome::Failed(_) => failed += 1,
            }
        }
        info!(
            references = references.len(),
            found,
            not_found,
            failed,
            "User references resolved"
        );

        resolved
    }
}
