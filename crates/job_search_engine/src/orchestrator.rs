use std::sync::Arc;

use job_search_core::{
    update, Effect, FilterState, Generation, JobRecord, Msg, RequestStatus, SearchError,
    SearchState, SearchViewModel,
};
use search_logging::{search_debug, search_info, search_warn};
use tokio::sync::mpsc;

use crate::{AuthProvider, CatalogClient, EngineEvent, FailureKind, FetchError};

/// Whether a completed fetch was applied or dropped as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDisposition {
    Accepted(Generation),
    Stale(Generation),
}

/// Drives a [`SearchState`] against a live catalog.
///
/// Every filter change runs the pure `update` and spawns one Tokio task per
/// requested fetch. Completions come back over a channel and are applied with
/// [`next_response`](Self::next_response), [`settle`](Self::settle) or
/// [`poll_responses`](Self::poll_responses). Fetches are never cancelled; a
/// reply whose generation is no longer current is dropped.
///
/// Entry points that may start a fetch must be called from within a Tokio
/// runtime.
pub struct RequestOrchestrator {
    state: SearchState,
    catalog: Arc<dyn CatalogClient>,
    auth: Arc<dyn AuthProvider>,
    event_tx: mpsc::UnboundedSender<EngineEvent>,
    event_rx: mpsc::UnboundedReceiver<EngineEvent>,
    in_flight: usize,
}

impl RequestOrchestrator {
    pub fn new(catalog: Arc<dyn CatalogClient>, auth: Arc<dyn AuthProvider>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            state: SearchState::new(),
            catalog,
            auth,
            event_tx,
            event_rx,
            in_flight: 0,
        }
    }

    /// Loads the unfiltered catalog, as when the search view first opens.
    pub fn start(&mut self) {
        self.dispatch(Msg::Mounted);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::SearchTextChanged(text.into()));
    }

    pub fn submit_search(&mut self) {
        self.dispatch(Msg::SearchSubmitted);
    }

    pub fn toggle_employment_type(&mut self, token: impl Into<String>, included: bool) {
        self.dispatch(Msg::EmploymentTypeToggled {
            token: token.into(),
            included,
        });
    }

    pub fn set_salary_range(&mut self, token: Option<String>) {
        self.dispatch(Msg::SalaryRangeSelected(token));
    }

    /// Re-sends the filters used by the most recent fetch.
    pub fn retry(&mut self) {
        self.dispatch(Msg::RetryClicked);
    }

    pub fn status(&self) -> RequestStatus {
        self.state.status()
    }

    /// Last successful job list. Still returned while the status is `Failure`.
    pub fn jobs(&self) -> &[JobRecord] {
        self.state.jobs()
    }

    pub fn filters(&self) -> &FilterState {
        self.state.filters()
    }

    pub fn generation(&self) -> Generation {
        self.state.generation()
    }

    pub fn view(&self) -> SearchViewModel {
        self.state.view()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Returns whether the view changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    /// Applies a message and runs whatever effects it produces.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    /// Waits for the next fetch to complete and applies it.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn next_response(&mut self) -> Option<ResponseDisposition> {
        if self.in_flight == 0 {
            return None;
        }
        let event = self.event_rx.recv().await?;
        Some(self.handle_event(event))
    }

    /// Applies completions until no fetch is in flight.
    pub async fn settle(&mut self) {
        while self.next_response().await.is_some() {}
    }

    /// Applies completions that are already available without waiting.
    pub fn poll_responses(&mut self) -> Vec<ResponseDisposition> {
        let mut applied = Vec::new();
        while self.in_flight > 0 {
            match self.event_rx.try_recv() {
                Ok(event) => applied.push(self.handle_event(event)),
                Err(_) => break,
            }
        }
        applied
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchJobs { generation, query } => {
                let credential = self.auth.bearer_token();
                search_info!(
                    "FetchJobs generation={} employment_type={:?} minimum_package={:?} search={:?}",
                    generation,
                    query.employment_types_csv(),
                    query.minimum_package(),
                    query.search()
                );
                let catalog = Arc::clone(&self.catalog);
                let event_tx = self.event_tx.clone();
                self.in_flight += 1;
                let fetch =
                    tokio::spawn(async move { catalog.fetch_jobs(&query, &credential).await });
                // A completion is sent even if the fetch panics, so `in_flight` stays exact.
                tokio::spawn(async move {
                    let result = fetch.await.unwrap_or_else(|join_err| {
                        Err(FetchError::new(
                            FailureKind::Network,
                            format!("fetch task failed: {join_err}"),
                        ))
                    });
                    let _ = event_tx.send(EngineEvent::CatalogCompleted { generation, result });
                });
            }
        }
    }

    fn handle_event(&mut self, event: EngineEvent) -> ResponseDisposition {
        match event {
            EngineEvent::CatalogCompleted { generation, result } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if !self.state.is_current(generation) {
                    search_debug!(
                        "Discarding stale response generation={} current={}",
                        generation,
                        self.state.generation()
                    );
                    return ResponseDisposition::Stale(generation);
                }

                let result = result
                    .map(|body| body.bytes)
                    .map_err(SearchError::from);
                self.dispatch(Msg::CatalogResponded { generation, result });

                match (self.state.status(), self.state.last_error()) {
                    (RequestStatus::Failure, Some(err)) => {
                        search_warn!("Fetch generation={} failed: {}", generation, err);
                    }
                    _ => {
                        search_info!(
                            "Fetch generation={} returned {} jobs",
                            generation,
                            self.state.jobs().len()
                        );
                    }
                }
                ResponseDisposition::Accepted(generation)
            }
        }
    }
}
