use crate::projector::project;
use crate::view_model::AppViewModel;
use crate::{Completion, DealRecord, FetchState, FetchTracker, Generation, PageRequest};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    fetch: FetchTracker,
    search_term: String,
    request: PageRequest,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.fetch.state()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn in_flight(&self) -> Option<Generation> {
        self.fetch.in_flight().map(|(generation, _)| generation)
    }

    /// Projects the current fetch result through the search term.
    ///
    /// Deals only appear while `Loaded`; loading and failure show none.
    pub fn view(&self) -> AppViewModel {
        let state = self.fetch.state();
        let items = state.items();
        AppViewModel {
            status: state.status(),
            deals: project(items, &self.search_term),
            failure: match state {
                FetchState::Failed(reason) => Some(reason.clone()),
                _ => None,
            },
            search_term: self.search_term.clone(),
            total_loaded: items.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn start_fetch(&mut self) -> (Generation, PageRequest) {
        let generation = self.fetch.start(self.request);
        self.dirty = true;
        (generation, self.request)
    }

    pub(crate) fn cancel_fetch(&mut self) -> Option<Generation> {
        let cancelled = self.fetch.cancel();
        if cancelled.is_some() {
            self.dirty = true;
        }
        cancelled
    }

    pub(crate) fn apply_completion(
        &mut self,
        generation: Generation,
        outcome: Result<Vec<DealRecord>, String>,
    ) -> Completion {
        let completion = self.fetch.complete(generation, outcome);
        if completion == Completion::Applied {
            self.dirty = true;
        }
        completion
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        if self.search_term != term {
            self.search_term = term;
            self.dirty = true;
        }
    }
}
