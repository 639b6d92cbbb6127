use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_empty() {
    let cfg = ScoutConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ScoutConfig::default());
    assert_eq!(cfg.graphql_url(), "/graphql");
    assert_eq!(cfg.stands_page_limit, DEFAULT_STANDS_PAGE_LIMIT);
    assert!(cfg.analytics_url.is_none());
}

#[test]
fn from_lookup_normalizes_urls_and_paths() {
    let cfg = ScoutConfig::from_lookup(lookup(&[
        ("SCOUT_API_BASE_URL", "https://api.example.com/"),
        ("SCOUT_GRAPHQL_PATH", "gql"),
        ("SCOUT_ANALYTICS_URL", "  https://collect.example.com/track "),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base_url, "https://api.example.com");
    assert_eq!(cfg.graphql_url(), "https://api.example.com/gql");
    assert_eq!(cfg.access_token_url(), "https://api.example.com/api/auth/access-token");
    assert_eq!(cfg.analytics_url.as_deref(), Some("https://collect.example.com/track"));
}

#[test]
fn from_lookup_parses_numbers() {
    let cfg = ScoutConfig::from_lookup(lookup(&[
        ("SCOUT_STANDS_PAGE_LIMIT", "25"),
        ("SCOUT_MAP_PADDING_PX", "12.5"),
        ("SCOUT_MAP_MAX_ZOOM", "14"),
    ]))
    .unwrap();
    assert_eq!(cfg.stands_page_limit, 25);
    assert_eq!(cfg.map_padding_px, 12.5);
    assert_eq!(cfg.map_max_zoom, 14.0);
}

#[test]
fn from_lookup_rejects_bad_numbers() {
    let err = ScoutConfig::from_lookup(lookup(&[("SCOUT_STANDS_PAGE_LIMIT", "ten")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "SCOUT_STANDS_PAGE_LIMIT", value: "ten".to_owned() });

    let err = ScoutConfig::from_lookup(lookup(&[("SCOUT_STANDS_PAGE_LIMIT", "0")])).unwrap_err();
    assert!(err.to_string().contains("SCOUT_STANDS_PAGE_LIMIT"));
}

#[test]
fn api_url_joins_paths() {
    let cfg = ScoutConfig { api_base_url: "https://api.example.com".to_owned(), ..ScoutConfig::default() };
    assert_eq!(
        cfg.api_url("scout/property/p-1/export"),
        "https://api.example.com/scout/property/p-1/export"
    );
}
