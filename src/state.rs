//! Session state for the airport directory and the transition function that
//! mutates it. State changes only happen through `update(state, action)`, so
//! every transition is a pure function that can be tested without a gateway
//! or a terminal.

use crate::model::{Airport, Envelope};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const HISTORY_LIMIT: usize = 5;
/// Fixed user-facing message for any failed load. The original cause is
/// logged by the store and otherwise discarded.
pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar aeropuertos";

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Idle,
    Loading,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    /// Current 1-based page. Callers, not the state, keep this >= 1.
    pub page: u32,
    pub page_size: u32,
    pub total: u32,
}

impl Pagination {
    pub fn total_pages(&self) -> u32 {
        self.total.div_ceil(self.page_size)
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryState {
    /// Most recently loaded page, in server response order.
    pub airports: Vec<Airport>,
    /// Selection key (IATA code), resolved lazily via `selected_airport` so
    /// the selection cannot hold a stale record after the list changes.
    pub selected: Option<String>,
    pub search_term: String,
    /// Up to `HISTORY_LIMIT` distinct non-empty terms, most recent first.
    pub search_history: Vec<String>,
    pub pagination: Pagination,
    pub status: Status,
    pub dark_mode: bool,
    /// Ticket of the last applied fetch completion.
    last_applied: u64,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            airports: Vec::new(),
            selected: None,
            search_term: String::new(),
            search_history: Vec::new(),
            pagination: Pagination {
                page: 1,
                page_size: DEFAULT_PAGE_SIZE,
                total: 0,
            },
            status: Status::Idle,
            dark_mode: false,
            last_applied: 0,
        }
    }
}

impl DirectoryState {
    pub fn selected_airport(&self) -> Option<&Airport> {
        let code = self.selected.as_deref()?;
        self.airports
            .iter()
            .find(|a| a.iata_code.eq_ignore_ascii_case(code))
    }

    /// Client-side re-filter of the loaded page by case-insensitive substring
    /// match on name or IATA code. Runs on top of the server-side `search`
    /// parameter; the displayed list is always this view, never `airports`
    /// directly.
    pub fn filtered(&self) -> Vec<&Airport> {
        let term = self.search_term.to_lowercase();
        self.airports
            .iter()
            .filter(|a| {
                a.airport_name.to_lowercase().contains(&term)
                    || a.iata_code.to_lowercase().contains(&term)
            })
            .collect()
    }
}

/// Everything that can happen to the directory.
#[derive(Debug, Clone)]
pub enum Action {
    /// A fetch was issued. Displayed data stays until a completion lands;
    /// only the status flips immediately (stale-while-revalidate).
    LoadStarted,
    LoadCompleted {
        ticket: u64,
        page: u32,
        envelope: Envelope,
    },
    LoadFailed {
        ticket: u64,
    },
    SearchSubmitted {
        term: String,
    },
    Selected {
        code: String,
    },
    DarkModeToggled,
}

/// Completions carry the ticket the store issued for their fetch; one that is
/// older than the last applied ticket lost the race and is dropped, so
/// overlapping fetches resolve in issuance order rather than last-write-wins.
fn is_stale(state: &DirectoryState, ticket: u64) -> bool {
    ticket < state.last_applied
}

pub fn update(mut state: DirectoryState, action: Action) -> DirectoryState {
    match action {
        Action::LoadStarted => {
            state.status = Status::Loading;
        }
        Action::LoadCompleted {
            ticket,
            page,
            envelope,
        } => {
            if is_stale(&state, ticket) {
                log::debug!("dropping stale load completion (ticket {ticket})");
                return state;
            }
            state.last_applied = ticket;
            state.airports = envelope.data;
            state.pagination.page = page;
            state.pagination.total = envelope.pagination.total;
            state.status = Status::Idle;
        }
        Action::LoadFailed { ticket } => {
            if is_stale(&state, ticket) {
                log::debug!("dropping stale load failure (ticket {ticket})");
                return state;
            }
            state.last_applied = ticket;
            state.status = Status::Error(LOAD_ERROR_MESSAGE.to_string());
        }
        Action::SearchSubmitted { term } => {
            if !term.is_empty() {
                state.search_history.retain(|t| t != &term);
                state.search_history.insert(0, term.clone());
                state.search_history.truncate(HISTORY_LIMIT);
            }
            state.search_term = term;
        }
        Action::Selected { code } => {
            state.selected = Some(code);
        }
        Action::DarkModeToggled => {
            state.dark_mode = !state.dark_mode;
        }
    }
    state
}
