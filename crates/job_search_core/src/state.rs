use crate::view_model::{FiltersView, JobsView, SearchViewModel};
use crate::{build_query, normalize_response, Effect, FilterState, JobList, SearchError};

/// Identifies one triggered fetch. Strictly increasing per [`SearchState`].
pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    InProgress,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    filters: FilterState,
    /// Filters sent with the most recent fetch; what Retry re-sends.
    last_used: Option<FilterState>,
    status: RequestStatus,
    generation: Generation,
    jobs: JobList,
    last_error: Option<SearchError>,
    dirty: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Last successfully fetched jobs. Kept while the status is `Failure`.
    pub fn jobs(&self) -> &[crate::JobRecord] {
        &self.jobs
    }

    /// Why the latest accepted fetch failed. Not part of the view model.
    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation
    }

    pub fn view(&self) -> SearchViewModel {
        let jobs = match self.status {
            RequestStatus::Idle => JobsView::Idle,
            RequestStatus::InProgress => JobsView::Loading,
            RequestStatus::Failure => JobsView::Failure,
            RequestStatus::Success if self.jobs.is_empty() => JobsView::NoJobs,
            RequestStatus::Success => JobsView::Jobs(self.jobs.clone()),
        };
        SearchViewModel {
            filters: FiltersView {
                search_text: self.filters.search_text().to_string(),
                employment_types: self.filters.employment_types().to_vec(),
                salary_range: self.filters.salary_range().map(ToOwned::to_owned),
            },
            status: self.status,
            generation: self.generation,
            jobs,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_filters(&mut self, filters: FilterState) {
        if self.filters != filters {
            self.filters = filters;
            self.mark_dirty();
        }
    }

    /// Filters the last fetch was built from, or the current ones if none ran.
    pub(crate) fn retry_filters(&self) -> FilterState {
        self.last_used
            .clone()
            .unwrap_or_else(|| self.filters.clone())
    }

    /// Starts a new generation for `filters` and returns the fetch to run.
    pub(crate) fn begin_fetch(&mut self, filters: FilterState) -> Effect {
        self.generation += 1;
        self.status = RequestStatus::InProgress;
        let query = build_query(&filters);
        self.last_used = Some(filters);
        self.mark_dirty();
        Effect::FetchJobs {
            generation: self.generation,
            query,
        }
    }

    /// Applies a catalog reply. Replies from older generations are ignored.
    pub(crate) fn apply_response(
        &mut self,
        generation: Generation,
        result: Result<Vec<u8>, SearchError>,
    ) {
        if !self.is_current(generation) {
            return;
        }
        match result.and_then(|body| normalize_response(&body)) {
            Ok(jobs) => {
                self.jobs = jobs;
                self.status = RequestStatus::Success;
                self.last_error = None;
            }
            Err(err) => {
                self.status = RequestStatus::Failure;
                self.last_error = Some(err);
            }
        }
        self.mark_dirty();
    }
}
