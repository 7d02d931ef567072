use jobsearch_core::{JobIdentifier, SavedSet};
use search_logging::{search_debug, search_info, search_warn};

use crate::{KeyValueStore, PersistError};

/// Storage key holding the saved job identifiers.
pub const SAVED_JOBS_KEY: &str = "savedJobs";

/// Loads and persists the saved set as a JSON array of identifiers.
#[derive(Debug, Clone)]
pub struct SavedJobsStore<S> {
    store: S,
}

impl<S: KeyValueStore> SavedJobsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the persisted set. Absent, unreadable or malformed state yields
    /// an empty set; the cause is logged and never surfaced.
    pub fn load(&self) -> SavedSet {
        let text = match self.store.get(SAVED_JOBS_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => {
                search_debug!("No saved jobs persisted yet");
                return SavedSet::new();
            }
            Err(err) => {
                search_warn!("Failed to read saved jobs: {}", err);
                return SavedSet::new();
            }
        };

        let ids: Vec<String> = match serde_json::from_str(&text) {
            Ok(ids) => ids,
            Err(err) => {
                search_warn!("Ignoring malformed saved jobs state: {}", err);
                return SavedSet::new();
            }
        };

        let saved: SavedSet = ids.into_iter().map(JobIdentifier::from).collect();
        search_info!("Loaded {} saved job(s)", saved.len());
        saved
    }

    /// Overwrites the persisted set with `saved`.
    pub fn persist(&self, saved: &SavedSet) -> Result<(), PersistError> {
        let payload = serde_json::to_string(&saved.to_strings())?;
        self.store.set(SAVED_JOBS_KEY, &payload)
    }
}
