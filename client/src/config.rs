//! Client configuration for API endpoints, analytics and map framing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so values are baked in at
//! build time with `option_env!`. Parsing goes through [`ScoutConfig::from_lookup`]
//! so tests can feed plain maps.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_GRAPHQL_PATH: &str = "/graphql";
pub const DEFAULT_ACCESS_TOKEN_PATH: &str = "/api/auth/access-token";
pub const DEFAULT_STANDS_PAGE_LIMIT: u32 = 10;
pub const DEFAULT_MAP_PADDING_PX: f64 = 40.0;
pub const DEFAULT_MAP_MAX_ZOOM: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoutConfig {
    /// Origin of the Scout API, without trailing slash. Empty means same origin.
    pub api_base_url: String,
    pub graphql_path: String,
    pub access_token_path: String,
    /// Analytics collector; events are only logged when unset.
    pub analytics_url: Option<String>,
    pub stands_page_limit: u32,
    pub map_padding_px: f64,
    pub map_max_zoom: f64,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            graphql_path: DEFAULT_GRAPHQL_PATH.to_owned(),
            access_token_path: DEFAULT_ACCESS_TOKEN_PATH.to_owned(),
            analytics_url: None,
            stands_page_limit: DEFAULT_STANDS_PAGE_LIMIT,
            map_padding_px: DEFAULT_MAP_PADDING_PX,
            map_max_zoom: DEFAULT_MAP_MAX_ZOOM,
        }
    }
}

impl ScoutConfig {
    /// Build config from a key lookup.
    ///
    /// Optional:
    /// - `SCOUT_API_BASE_URL`: default same origin
    /// - `SCOUT_GRAPHQL_PATH`: default `/graphql`
    /// - `SCOUT_ACCESS_TOKEN_PATH`: default `/api/auth/access-token`
    /// - `SCOUT_ANALYTICS_URL`: default unset
    /// - `SCOUT_STANDS_PAGE_LIMIT`: default 10, must be positive
    /// - `SCOUT_MAP_PADDING_PX`: default 40
    /// - `SCOUT_MAP_MAX_ZOOM`: default 16
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_base_url = non_empty("SCOUT_API_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base_url);
        let graphql_path = non_empty("SCOUT_GRAPHQL_PATH").map_or(defaults.graphql_path, |v| ensure_leading_slash(&v));
        let access_token_path =
            non_empty("SCOUT_ACCESS_TOKEN_PATH").map_or(defaults.access_token_path, |v| ensure_leading_slash(&v));
        let analytics_url = non_empty("SCOUT_ANALYTICS_URL");

        let stands_page_limit = parse_or("SCOUT_STANDS_PAGE_LIMIT", non_empty("SCOUT_STANDS_PAGE_LIMIT"), defaults.stands_page_limit)?;
        if stands_page_limit == 0 {
            return Err(ConfigError::Invalid { key: "SCOUT_STANDS_PAGE_LIMIT", value: "0".to_owned() });
        }
        let map_padding_px = parse_or("SCOUT_MAP_PADDING_PX", non_empty("SCOUT_MAP_PADDING_PX"), defaults.map_padding_px)?;
        let map_max_zoom = parse_or("SCOUT_MAP_MAX_ZOOM", non_empty("SCOUT_MAP_MAX_ZOOM"), defaults.map_max_zoom)?;

        Ok(Self {
            api_base_url,
            graphql_path,
            access_token_path,
            analytics_url,
            stands_page_limit,
            map_padding_px,
            map_max_zoom,
        })
    }

    /// Config baked into the bundle at build time. Falls back to defaults on
    /// a malformed value.
    pub fn from_build_env() -> Self {
        let lookup = |key: &str| -> Option<String> {
            let value = match key {
                "SCOUT_API_BASE_URL" => option_env!("SCOUT_API_BASE_URL"),
                "SCOUT_GRAPHQL_PATH" => option_env!("SCOUT_GRAPHQL_PATH"),
                "SCOUT_ACCESS_TOKEN_PATH" => option_env!("SCOUT_ACCESS_TOKEN_PATH"),
                "SCOUT_ANALYTICS_URL" => option_env!("SCOUT_ANALYTICS_URL"),
                "SCOUT_STANDS_PAGE_LIMIT" => option_env!("SCOUT_STANDS_PAGE_LIMIT"),
                "SCOUT_MAP_PADDING_PX" => option_env!("SCOUT_MAP_PADDING_PX"),
                "SCOUT_MAP_MAX_ZOOM" => option_env!("SCOUT_MAP_MAX_ZOOM"),
                _ => None,
            };
            value.map(str::to_owned)
        };
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            leptos::logging::warn!("scout config: {e}; using defaults");
            Self::default()
        })
    }

    #[must_use]
    pub fn graphql_url(&self) -> String {
        self.api_url(&self.graphql_path)
    }

    #[must_use]
    pub fn access_token_url(&self) -> String {
        self.api_url(&self.access_token_path)
    }

    /// Absolute (or same-origin) URL for an API path starting with `/`.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, ensure_leading_slash(path))
    }
}

fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') { path.to_owned() } else { format!("/{path}") }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid { key, value }),
    }
}
