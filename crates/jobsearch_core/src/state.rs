use crate::view_model::{AppViewModel, JobCardView, ResultsView};
use crate::{JobRecord, RequestId, SavedSet, SearchCache, SearchKey, SearchStatus, Selection};

/// Whole page state: the current selection, the search cache and the saved set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selection: Selection,
    cache: SearchCache,
    saved: SavedSet,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn saved(&self) -> &SavedSet {
        &self.saved
    }

    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    pub fn current_key(&self) -> SearchKey {
        self.selection.key()
    }

    pub fn current_status(&self) -> Option<&SearchStatus> {
        self.cache.status(&self.current_key())
    }

    /// Jobs of the current selection; empty unless its search succeeded.
    pub fn current_jobs(&self) -> &[JobRecord] {
        match self.current_status() {
            Some(SearchStatus::Success(jobs)) => jobs,
            _ => &[],
        }
    }

    pub fn view(&self) -> AppViewModel {
        let results = match self.current_status() {
            None | Some(SearchStatus::Pending { .. }) => ResultsView::Loading,
            Some(SearchStatus::Failure(message)) => ResultsView::Error(message.clone()),
            Some(SearchStatus::Success(jobs)) => {
                let available: Vec<JobCardView> = jobs
                    .iter()
                    .enumerate()
                    .map(|(index, job)| JobCardView::from_job(index + 1, job, &self.saved))
                    .collect();
                let saved = if self.saved.is_empty() {
                    None
                } else {
                    Some(
                        available
                            .iter()
                            .filter(|card| card.saved)
                            .cloned()
                            .collect(),
                    )
                };
                ResultsView::Loaded { available, saved }
            }
        };

        AppViewModel {
            role: self.selection.role,
            location: self.selection.location,
            results,
            saved_count: self.saved.len(),
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_selection(&mut self, selection: Selection) -> bool {
        if self.selection == selection {
            return false;
        }
        self.selection = selection;
        self.mark_dirty();
        true
    }

    pub(crate) fn request_current(&mut self) -> Option<(RequestId, SearchKey)> {
        let key = self.current_key();
        self.cache.request(&key).map(|request_id| (request_id, key))
    }

    pub(crate) fn complete_search(
        &mut self,
        request_id: RequestId,
        key: &SearchKey,
        result: Result<Vec<JobRecord>, String>,
    ) {
        let accepted = self.cache.complete(request_id, key, result);
        if accepted && *key == self.current_key() {
            self.mark_dirty();
        }
    }

    pub(crate) fn restore_saved(&mut self, saved: SavedSet) {
        self.saved = saved;
        self.mark_dirty();
    }

    pub(crate) fn toggle_saved(&mut self, job: &JobRecord) -> &SavedSet {
        self.saved.toggle(job.identifier());
        self.mark_dirty();
        &self.saved
    }
}
