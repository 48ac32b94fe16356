//! # Session configuration.
//!
//! Provides [`SessionConfig`], the explicit immutable configuration for a
//! menu session. Built once at startup — either directly, or from resolved
//! [`Settings`] keys — and passed by reference into the session builder.
//!
//! ## Field semantics
//! - `title`: printed once, before the first render only (`None` = no title)
//! - `looping`: `true` = interactive read-eval loop until the empty-input
//!   sentinel; `false` = exactly one iteration, then unconditional
//!   termination (one-shot integration scenarios)

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Configuration for one menu session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Optional menu title, shown before the first render only.
    pub title: Option<String>,

    /// Whether the session loops until the empty-input sentinel.
    ///
    /// Non-looping sessions perform exactly one render/read/(dispatch)
    /// iteration and then terminate, and dispatch failures propagate to the
    /// caller instead of being reported and swallowed.
    pub looping: bool,
}

impl Default for SessionConfig {
    /// Default configuration: no title, looping enabled.
    fn default() -> Self {
        Self {
            title: None,
            looping: true,
        }
    }
}

impl SessionConfig {
    /// Builds a config from resolved settings keys.
    ///
    /// Reads `menu.title` and `menu.loop`; missing keys keep the defaults.
    pub fn from_settings(settings: &Settings) -> Self {
        let defaults = Self::default();
        Self {
            title: settings.get("menu.title").map(str::to_owned),
            looping: settings
                .get_parsed("menu.loop")
                .unwrap_or(defaults.looping),
        }
    }
}
