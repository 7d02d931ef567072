use std::collections::HashMap;

use search_logging::{search_debug, search_warn};

use crate::{JobRecord, SearchKey};

/// Monotonic id handed out for every network request the cache asks for.
pub type RequestId = u64;

/// Observable state of one search key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Pending { request_id: RequestId },
    Success(Vec<JobRecord>),
    Failure(String),
}

/// Memoizing cache from (role, location) to the last known search status.
///
/// A key with a stored success or a request in flight never asks for another
/// request. Failures are remembered for display but are not cached results:
/// the next request for that key goes back to the network. Completions are
/// only accepted from the request id currently pending for their key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCache {
    entries: HashMap<SearchKey, SearchStatus>,
    last_request_id: RequestId,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of a new request when `key` needs one, `None` on a hit
    /// or while a request for `key` is already in flight.
    pub fn request(&mut self, key: &SearchKey) -> Option<RequestId> {
        match self.entries.get(key) {
            Some(SearchStatus::Success(_)) => {
                search_debug!("search cache hit for {}", key);
                None
            }
            Some(SearchStatus::Pending { request_id }) => {
                search_debug!("search for {} already in flight (#{})", key, request_id);
                None
            }
            Some(SearchStatus::Failure(_)) | None => {
                self.last_request_id += 1;
                let request_id = self.last_request_id;
                self.entries
                    .insert(key.clone(), SearchStatus::Pending { request_id });
                Some(request_id)
            }
        }
    }

    /// Records the outcome of request `request_id`. Returns `false` when the
    /// completion does not match the pending request for `key`.
    pub fn complete(
        &mut self,
        request_id: RequestId,
        key: &SearchKey,
        result: Result<Vec<JobRecord>, String>,
    ) -> bool {
        match self.entries.get(key) {
            Some(SearchStatus::Pending { request_id: pending }) if *pending == request_id => {
                let status = match result {
                    Ok(jobs) => SearchStatus::Success(jobs),
                    Err(message) => SearchStatus::Failure(message),
                };
                self.entries.insert(key.clone(), status);
                true
            }
            _ => {
                search_warn!(
                    "ignoring completion #{} for {}: no matching request pending",
                    request_id,
                    key
                );
                false
            }
        }
    }

    pub fn status(&self, key: &SearchKey) -> Option<&SearchStatus> {
        self.entries.get(key)
    }

    pub fn in_flight(&self) -> usize {
        self.entries
            .values()
            .filter(|status| matches!(status, SearchStatus::Pending { .. }))
            .count()
    }
}
