use std::collections::BTreeSet;

use crate::{JobIdentifier, JobRecord};

/// Identifiers of jobs the user marked as saved.
///
/// Membership is all that matters; iteration order is the identifier order
/// so that persisted payloads are stable between runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedSet {
    ids: BTreeSet<JobIdentifier>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_saved(&self, id: &JobIdentifier) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership of `id`. Returns `true` when the id is now saved.
    pub fn toggle(&mut self, id: JobIdentifier) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Flips membership of the job's identifier and returns the resulting set.
    pub fn toggled(mut self, job: &JobRecord) -> Self {
        self.toggle(job.identifier());
        self
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.ids.iter().map(|id| id.as_str().to_string()).collect()
    }
}

impl FromIterator<JobIdentifier> for SavedSet {
    fn from_iter<I: IntoIterator<Item = JobIdentifier>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
