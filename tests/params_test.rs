use aerodir::query::{FetchParams, DEFAULT_LIMIT};

#[test]
fn defaults_match_api_defaults() {
    let p = FetchParams::default();
    assert_eq!(p.offset, 0);
    assert_eq!(p.limit, DEFAULT_LIMIT);
    assert_eq!(p.search, "");
}

#[test]
fn page_one_starts_at_offset_zero() {
    let p = FetchParams::for_page(1, 10, "");
    assert_eq!(p.offset, 0);
    assert_eq!(p.limit, 10);
}

#[test]
fn page_three_of_ten_is_offset_twenty() {
    let p = FetchParams::for_page(3, 10, "");
    assert_eq!(p.offset, 20);
}

#[test]
fn offset_scales_with_page_size() {
    let p = FetchParams::for_page(4, 25, "");
    assert_eq!(p.offset, 75);
    assert_eq!(p.limit, 25);
}

#[test]
fn page_zero_is_treated_as_page_one() {
    let p = FetchParams::for_page(0, 10, "");
    assert_eq!(p.offset, 0);
}

#[test]
fn for_page_carries_search_term() {
    let p = FetchParams::for_page(2, 10, "lax");
    assert_eq!(p.search, "lax");
    assert_eq!(p.offset, 10);
}

#[test]
fn for_code_searches_with_default_window() {
    let p = FetchParams::for_code("LAX");
    assert_eq!(p.search, "LAX");
    assert_eq!(p.offset, 0);
    assert_eq!(p.limit, DEFAULT_LIMIT);
}

#[test]
fn zero_limit_is_rejected() {
    let p = FetchParams {
        limit: 0,
        ..FetchParams::default()
    };
    assert!(p.validate().is_err());
}

#[test]
fn url_params_always_include_search() {
    let p = FetchParams::for_page(2, 10, "");
    let params = p.to_url_params();
    assert_eq!(
        params,
        vec![
            ("offset".to_string(), "10".to_string()),
            ("limit".to_string(), "10".to_string()),
            ("search".to_string(), String::new()),
        ]
    );
}
