use crate::{RequestId, SavedSet, SearchKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one search request; its completion comes back as `Msg::SearchCompleted`.
    Search { request_id: RequestId, key: SearchKey },
    /// Overwrite persisted saved jobs with this set.
    PersistSaved(SavedSet),
}
