use crate::{JobIdentifier, JobRecord, Location, Role, SavedSet};

/// Shown instead of a company logo when the listing has none.
pub const NO_LOGO_PLACEHOLDER: &str = "No Logo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub role: Role,
    pub location: Location,
    pub results: ResultsView,
    pub saved_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Loading,
    Error(String),
    Loaded {
        available: Vec<JobCardView>,
        /// `None` while nothing is saved; otherwise the saved subset of `available`.
        saved: Option<Vec<JobCardView>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    /// 1-based position in the "Available Jobs" list.
    pub number: usize,
    pub id: JobIdentifier,
    pub title: String,
    pub company: String,
    pub logo: String,
    pub salary: String,
    pub location: String,
    pub job_type: String,
    pub posted: String,
    pub saved: bool,
}

impl JobCardView {
    pub(crate) fn from_job(number: usize, job: &JobRecord, saved: &SavedSet) -> Self {
        let id = job.identifier();
        let mut location = job.location.clone().unwrap_or_default();
        if job.is_remote {
            if !location.is_empty() {
                location.push(' ');
            }
            location.push_str("Remote");
        }
        Self {
            number,
            saved: saved.is_saved(&id),
            id,
            title: job.title.clone(),
            company: job.company.clone(),
            logo: job
                .company_image
                .clone()
                .unwrap_or_else(|| NO_LOGO_PLACEHOLDER.to_string()),
            salary: job.salary.clone().unwrap_or_default(),
            location,
            job_type: job.job_type.clone().unwrap_or_default(),
            posted: job.posted_at.clone().unwrap_or_default(),
        }
    }
}
