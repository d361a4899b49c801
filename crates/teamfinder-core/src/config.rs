//! Client configuration model.
//!
//! Every switch here only selects which branch of the auth bootstrap runs or
//! where requests go; none of them changes a data format.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Debounce window for auto-saved profile text fields.
pub const DEFAULT_AUTOSAVE_DEBOUNCE_MS: u64 = 600;

/// Environment variable names recognised by [`ClientConfig::apply_overrides`].
pub const ENV_API_URL: &str = "TEAMFINDER_API_URL";
pub const ENV_DEV_MODE: &str = "TEAMFINDER_DEV_MODE";
pub const ENV_FORCE_DEV_LOGIN: &str = "TEAMFINDER_FORCE_DEV_LOGIN";
pub const ENV_FORCE_BROWSER: &str = "TEAMFINDER_FORCE_BROWSER";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// Development build. Defaults to the build profile.
    pub dev_mode: bool,
    /// Explicit opt-in to the dev-login endpoint outside the host.
    pub force_dev_login: bool,
    /// Ignore the native bridge and behave as a plain browser.
    pub force_browser_mode: bool,
    pub autosave_debounce_ms: u64,
    /// `None` keeps the transport's own default.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            dev_mode: cfg!(debug_assertions),
            force_dev_login: false,
            force_browser_mode: false,
            autosave_debounce_ms: DEFAULT_AUTOSAVE_DEBOUNCE_MS,
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Applies environment overrides through the given lookup.
    ///
    /// The lookup is usually `|key| std::env::var(key).ok()`; tests pass a map.
    /// Flags accept `1`/`true`/`yes` (case-insensitive) as on and anything
    /// else as off. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = non_empty(ENV_API_URL) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(value) = non_empty(ENV_DEV_MODE) {
            self.dev_mode = parse_flag(&value);
        }
        if let Some(value) = non_empty(ENV_FORCE_DEV_LOGIN) {
            self.force_dev_login = parse_flag(&value);
        }
        if let Some(value) = non_empty(ENV_FORCE_BROWSER) {
            self.force_browser_mode = parse_flag(&value);
        }
    }

    /// Whether the dev-login endpoint may be used outside the host.
    pub fn dev_login_allowed(&self) -> bool {
        self.force_dev_login || self.dev_mode
    }

    pub fn autosave_debounce(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
