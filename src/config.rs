//! Build-time configuration.
//!
//! The backend base URL is baked in at compile time from
//! `LEARNMAP_BACKEND_URL`, the way a bundler injects env vars into a web
//! build. Identity is out of scope: everyone is the guest user.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::api::ApiClient;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const GUEST_USER: &str = "guest";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub backend_url: String,
    pub user_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            user_id: GUEST_USER.to_owned(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::with_backend(option_env!("LEARNMAP_BACKEND_URL"))
    }

    /// Blank or unparseable URLs fall back to the default.
    pub fn with_backend(raw: Option<&str>) -> Self {
        let mut cfg = Self::default();
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) if ApiClient::new(s).is_ok() => cfg.backend_url = s.to_owned(),
            Some(s) => log::warn!("ignoring invalid backend url {s:?}, using {DEFAULT_BACKEND_URL}"),
            None => {}
        }
        cfg
    }
}
