use aerodir::model::{Airport, Envelope, PageInfo};
use aerodir::state::{
    update, Action, DirectoryState, Pagination, Status, HISTORY_LIMIT, LOAD_ERROR_MESSAGE,
};

fn airport(id: u64, iata: &str, name: &str) -> Airport {
    Airport {
        id,
        airport_name: name.to_string(),
        iata_code: iata.to_string(),
        icao_code: format!("K{iata}"),
        latitude: 33.94,
        longitude: -118.40,
        gmt: "-8".to_string(),
        country_name: "United States".to_string(),
        city_name: "Los Angeles".to_string(),
    }
}

fn envelope(data: Vec<Airport>, total: u32) -> Envelope {
    let count = data.len() as u32;
    Envelope {
        data,
        pagination: PageInfo {
            limit: 10,
            offset: 0,
            count,
            total,
        },
    }
}

fn completed(ticket: u64, page: u32, envelope: Envelope) -> Action {
    Action::LoadCompleted {
        ticket,
        page,
        envelope,
    }
}

#[test]
fn initial_state_defaults() {
    let state = DirectoryState::default();
    assert!(state.airports.is_empty());
    assert!(state.selected.is_none());
    assert_eq!(state.search_term, "");
    assert!(state.search_history.is_empty());
    assert_eq!(state.pagination.page, 1);
    assert_eq!(state.pagination.page_size, 10);
    assert_eq!(state.pagination.total, 0);
    assert_eq!(state.status, Status::Idle);
    assert!(!state.dark_mode);
}

#[test]
fn load_started_keeps_displayed_data() {
    let state = update(
        DirectoryState::default(),
        completed(1, 1, envelope(vec![airport(1, "LAX", "Los Angeles International")], 1)),
    );
    let state = update(state, Action::LoadStarted);
    assert_eq!(state.status, Status::Loading);
    assert_eq!(state.airports.len(), 1);
}

#[test]
fn load_started_clears_prior_error() {
    let state = update(DirectoryState::default(), Action::LoadFailed { ticket: 1 });
    let state = update(state, Action::LoadStarted);
    assert_eq!(state.status, Status::Loading);
}

#[test]
fn completion_replaces_list_and_pagination() {
    let state = update(
        DirectoryState::default(),
        completed(1, 3, envelope(vec![airport(1, "LAX", "Los Angeles International")], 25)),
    );
    assert_eq!(state.airports.len(), 1);
    assert_eq!(state.pagination.page, 3);
    assert_eq!(state.pagination.total, 25);
    assert_eq!(state.status, Status::Idle);
}

#[test]
fn failure_sets_fixed_message_and_keeps_data() {
    let state = update(
        DirectoryState::default(),
        completed(1, 1, envelope(vec![airport(1, "LAX", "Los Angeles International")], 1)),
    );
    let before = state.airports.clone();
    let before_pagination = state.pagination.clone();

    let state = update(state, Action::LoadFailed { ticket: 2 });
    assert_eq!(state.status, Status::Error(LOAD_ERROR_MESSAGE.to_string()));
    assert_eq!(state.airports, before);
    assert_eq!(state.pagination, before_pagination);
}

#[test]
fn stale_completion_is_dropped() {
    let newer = envelope(vec![airport(2, "SFO", "San Francisco International")], 1);
    let state = update(DirectoryState::default(), completed(2, 1, newer));

    let older = envelope(vec![airport(1, "LAX", "Los Angeles International")], 1);
    let state = update(state, completed(1, 1, older));

    assert_eq!(state.airports[0].iata_code, "SFO");
}

#[test]
fn stale_failure_is_dropped() {
    let state = update(
        DirectoryState::default(),
        completed(2, 1, envelope(vec![airport(2, "SFO", "San Francisco International")], 1)),
    );
    let state = update(state, Action::LoadFailed { ticket: 1 });
    assert_eq!(state.status, Status::Idle);
}

#[test]
fn search_puts_term_at_history_head() {
    let state = update(
        DirectoryState::default(),
        Action::SearchSubmitted { term: "LAX".into() },
    );
    assert_eq!(state.search_term, "LAX");
    assert_eq!(state.search_history, vec!["LAX".to_string()]);
}

#[test]
fn search_deduplicates_history() {
    let mut state = DirectoryState::default();
    for term in ["LAX", "SFO", "LAX"] {
        state = update(state, Action::SearchSubmitted { term: term.into() });
    }
    assert_eq!(
        state.search_history,
        vec!["LAX".to_string(), "SFO".to_string()]
    );
}

#[test]
fn history_never_exceeds_limit() {
    let mut state = DirectoryState::default();
    for term in ["a", "b", "c", "d", "e", "f", "g"] {
        state = update(state, Action::SearchSubmitted { term: term.into() });
    }
    assert_eq!(state.search_history.len(), HISTORY_LIMIT);
    assert_eq!(state.search_history[0], "g");
    assert!(!state.search_history.contains(&"a".to_string()));
}

#[test]
fn empty_search_term_is_not_recorded() {
    let state = update(
        DirectoryState::default(),
        Action::SearchSubmitted { term: "LAX".into() },
    );
    let state = update(state, Action::SearchSubmitted { term: String::new() });
    assert_eq!(state.search_term, "");
    assert_eq!(state.search_history, vec!["LAX".to_string()]);
}

#[test]
fn selection_resolves_against_current_list() {
    let state = update(
        DirectoryState::default(),
        completed(1, 1, envelope(vec![airport(1, "LAX", "Los Angeles International")], 1)),
    );
    let state = update(state, Action::Selected { code: "lax".into() });
    assert_eq!(
        state.selected_airport().map(|a| a.iata_code.as_str()),
        Some("LAX")
    );
}

#[test]
fn selection_outside_current_list_resolves_to_none() {
    let state = update(
        DirectoryState::default(),
        completed(1, 1, envelope(vec![airport(1, "LAX", "Los Angeles International")], 1)),
    );
    let state = update(state, Action::Selected { code: "LAX".into() });
    // The list moves on; the key no longer resolves instead of dangling.
    let state = update(
        state,
        completed(2, 2, envelope(vec![airport(2, "SFO", "San Francisco International")], 1)),
    );
    assert!(state.selected_airport().is_none());
}

#[test]
fn dark_mode_toggles() {
    let state = update(DirectoryState::default(), Action::DarkModeToggled);
    assert!(state.dark_mode);
    let state = update(state, Action::DarkModeToggled);
    assert!(!state.dark_mode);
}

#[test]
fn filtered_matches_name_case_insensitive() {
    let mut state = update(
        DirectoryState::default(),
        completed(
            1,
            1,
            envelope(
                vec![
                    airport(1, "LAX", "Los Angeles International"),
                    airport(2, "SFO", "San Francisco International"),
                ],
                2,
            ),
        ),
    );
    state = update(state, Action::SearchSubmitted { term: "angeles".into() });
    let visible = state.filtered();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].iata_code, "LAX");
}

#[test]
fn filtered_matches_iata_code() {
    let mut state = update(
        DirectoryState::default(),
        completed(
            1,
            1,
            envelope(
                vec![
                    airport(1, "LAX", "Los Angeles International"),
                    airport(2, "SFO", "San Francisco International"),
                ],
                2,
            ),
        ),
    );
    state = update(state, Action::SearchSubmitted { term: "sfo".into() });
    let visible = state.filtered();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].iata_code, "SFO");
}

#[test]
fn empty_term_shows_whole_page() {
    let state = update(
        DirectoryState::default(),
        completed(
            1,
            1,
            envelope(
                vec![
                    airport(1, "LAX", "Los Angeles International"),
                    airport(2, "SFO", "San Francisco International"),
                ],
                2,
            ),
        ),
    );
    assert_eq!(state.filtered().len(), 2);
}

#[test]
fn total_pages_rounds_up() {
    let pagination = Pagination {
        page: 1,
        page_size: 10,
        total: 25,
    };
    assert_eq!(pagination.total_pages(), 3);

    let exact = Pagination {
        page: 1,
        page_size: 10,
        total: 30,
    };
    assert_eq!(exact.total_pages(), 3);

    let empty = Pagination {
        page: 1,
        page_size: 10,
        total: 0,
    };
    assert_eq!(empty.total_pages(), 0);
}
