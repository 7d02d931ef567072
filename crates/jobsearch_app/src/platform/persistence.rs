use std::path::Path;

use jobsearch_core::SavedSet;
use jobsearch_engine::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, SavedJobsStore};
use search_logging::{search_error, search_info};

pub(crate) type SavedStore = SavedJobsStore<Box<dyn KeyValueStore>>;

pub(crate) fn open_saved_store(state_dir: &Path, ephemeral: bool) -> SavedStore {
    if ephemeral {
        search_info!("Saved jobs kept in memory only");
        return SavedJobsStore::new(Box::new(MemoryKeyValueStore::new()));
    }
    search_info!("Saved jobs stored under {:?}", state_dir);
    SavedJobsStore::new(Box::new(FileKeyValueStore::new(state_dir)))
}

pub(crate) fn load_saved_jobs(store: &SavedStore) -> SavedSet {
    store.load()
}

/// Write-through after every toggle. Failures are logged; the in-memory set
/// stays as the user left it.
pub(crate) fn save_saved_jobs(store: &SavedStore, saved: &SavedSet) {
    if let Err(err) = store.persist(saved) {
        search_error!("Failed to persist {} saved job(s): {}", saved.len(), err);
    }
}
