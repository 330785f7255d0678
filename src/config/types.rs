// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;
pub const DEFAULT_BLUR_HIDE_MS: u64 = 150;

/// Which lookup responses the autocomplete panel accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Only the response to the most recently issued lookup is shown
    #[default]
    LatestIssued,
    /// Whichever response arrives last is shown, even if it answers an older query
    LastArrived,
}

/// Backend connection section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// City autocomplete section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_blur_hide_ms")]
    pub blur_hide_ms: u64,
    /// Cap on rendered suggestions; unlimited when absent
    #[serde(default)]
    pub max_suggestions: Option<usize>,
    #[serde(default)]
    pub ordering: ResponseOrdering,
    /// Show a "suggestions unavailable" row when a lookup fails
    #[serde(default)]
    pub show_unavailable: bool,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_blur_hide_ms() -> u64 {
    DEFAULT_BLUR_HIDE_MS
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            blur_hide_ms: DEFAULT_BLUR_HIDE_MS,
            max_suggestions: None,
            ordering: ResponseOrdering::LatestIssued,
            show_unavailable: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}
