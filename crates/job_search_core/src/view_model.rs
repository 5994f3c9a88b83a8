use crate::{JobRecord, RequestStatus};

/// What the jobs pane shows. Renderers match on it exhaustively.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JobsView {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Jobs(Vec<JobRecord>),
    /// The latest fetch succeeded with an empty list.
    NoJobs,
    /// The latest fetch failed; offer Retry.
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FiltersView {
    pub search_text: String,
    pub employment_types: Vec<String>,
    pub salary_range: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchViewModel {
    pub filters: FiltersView,
    pub status: RequestStatus,
    pub generation: crate::Generation,
    pub jobs: JobsView,
    pub dirty: bool,
}
