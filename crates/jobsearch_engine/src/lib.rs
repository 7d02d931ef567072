//! Job search engine: HTTP search calls, background execution and persistence.
mod client;
mod engine;
mod persist;
mod saved;
mod store;
mod types;

pub use client::{ReqwestSearchClient, SearchClient, SearchSettings, DEFAULT_ENDPOINT};
pub use engine::{EngineEvents, EngineHandle};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use saved::{SavedJobsStore, SAVED_JOBS_KEY};
pub use store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use types::{EngineEvent, FailureKind, SearchError};
