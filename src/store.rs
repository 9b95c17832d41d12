use crate::gateway::Gateway;
use crate::query::FetchParams;
use crate::state::{update, Action, DirectoryState};

/// Owns the session's `DirectoryState` and drives it through the reducer.
/// All I/O lives here; the transitions themselves stay pure.
pub struct DirectoryStore<G: Gateway> {
    gateway: G,
    state: DirectoryState,
    next_ticket: u64,
}

impl<G: Gateway> DirectoryStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: DirectoryState::default(),
            next_ticket: 1,
        }
    }

    pub fn with_page_size(gateway: G, page_size: u32) -> Self {
        let mut store = Self::new(gateway);
        store.state.pagination.page_size = page_size;
        store
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = update(state, action);
    }

    /// Loads one page of the directory for the current search term.
    /// `page` is 1-based; callers clamp or reject anything below 1.
    ///
    /// A gateway failure collapses into a fixed error status and leaves the
    /// displayed data and pagination untouched; the cause goes to the log
    /// and nowhere else. No retry.
    pub async fn load_airports(&mut self, page: u32) {
        let ticket = self.next_ticket;
        self.next_ticket += 1;

        self.dispatch(Action::LoadStarted);

        let params = FetchParams::for_page(
            page,
            self.state.pagination.page_size,
            &self.state.search_term,
        );

        let result = self.gateway.fetch_airports(&params).await;
        match result {
            Ok(envelope) => self.dispatch(Action::LoadCompleted {
                ticket,
                page,
                envelope,
            }),
            Err(e) => {
                log::error!("failed to load airports (page {page}): {e}");
                self.dispatch(Action::LoadFailed { ticket });
            }
        }
    }

    /// Sets the search term, records non-empty terms in the history, and
    /// reloads from the first page.
    pub async fn search(&mut self, term: &str) {
        self.dispatch(Action::SearchSubmitted {
            term: term.to_string(),
        });
        self.load_airports(1).await;
    }

    /// Marks an airport as selected by IATA code. No membership check; the
    /// key is resolved against the current list at read time.
    pub fn select(&mut self, code: &str) {
        self.dispatch(Action::Selected {
            code: code.to_string(),
        });
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dispatch(Action::DarkModeToggled);
    }
}
