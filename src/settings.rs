//! # Layered, immutable startup settings.
//!
//! [`Settings`] is a flat key-value store with dotted path keys
//! (`"menu.title"`, `"seed.count"`). It is built **once** at startup by
//! [`SettingsBuilder`], which merges layers in ascending priority — each
//! layer overrides keys set by the layers before it:
//!
//! ```text
//! base TOML file → environment-specific TOML → env vars → CLI args
//! ```
//!
//! The rest of the crate only ever reads resolved values via
//! [`Settings::get`] / [`Settings::get_parsed`]; nothing mutates settings
//! after `build()`.
//!
//! ## Example
//! ```
//! use menuvisor::Settings;
//!
//! let settings = Settings::builder()
//!     .with_toml_str("[menu]\ntitle = \"Tools\"\n\n[seed]\ncount = 3")
//!     .unwrap()
//!     .with_args(["--seed.count=10".to_string()])
//!     .build();
//!
//! assert_eq!(settings.get("menu.title"), Some("Tools"));
//! assert_eq!(settings.get_parsed::<u32>("seed.count"), Some(10));
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Immutable resolved settings, looked up by dotted path key.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    /// Starts a new layered builder.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Returns the resolved value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the resolved value parsed as `T`.
    ///
    /// A present-but-unparsable value is treated as absent (warned in logs),
    /// so callers fall back to their defaults instead of failing startup.
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match raw.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(key, raw, "settings value failed to parse, ignoring");
                None
            }
        }
    }

    /// Number of resolved keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no layer contributed any key.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builder merging settings layers in ascending priority.
///
/// Layers are applied in call order; a later layer overrides keys already
/// set by earlier ones.
#[derive(Default)]
pub struct SettingsBuilder {
    values: HashMap<String, String>,
}

impl SettingsBuilder {
    /// Merges a TOML file layer. A missing file is skipped, not an error —
    /// environment-specific files are optional by convention.
    pub fn with_toml_file(self, path: impl AsRef<Path>) -> Result<Self, toml::de::Error> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => self.with_toml_str(&text),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "settings file skipped");
                Ok(self)
            }
        }
    }

    /// Merges a TOML string layer. Nested tables flatten to dotted keys,
    /// arrays to indexed keys (`"a.0"`, `"a.1"`).
    pub fn with_toml_str(mut self, text: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(text)?;
        for (key, value) in &table {
            flatten(key, value, &mut self.values);
        }
        Ok(self)
    }

    /// Merges process environment variables carrying `prefix`.
    ///
    /// `APP_MENU__TITLE=Tools` with prefix `"APP_"` becomes `menu.title`:
    /// the prefix is stripped, double underscores turn into dots, and the
    /// key is lowercased.
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        for (key, value) in std::env::vars() {
            if let Some(rest) = key.strip_prefix(prefix) {
                let key = rest.replace("__", ".").to_ascii_lowercase();
                self.values.insert(key, value);
            }
        }
        self
    }

    /// Merges command-line arguments of the form `--key.path=value`.
    /// Anything not matching that shape is ignored.
    pub fn with_args<I: IntoIterator<Item = String>>(mut self, args: I) -> Self {
        for arg in args {
            let Some(rest) = arg.strip_prefix("--") else {
                continue;
            };
            if let Some((key, value)) = rest.split_once('=') {
                if !key.is_empty() {
                    self.values.insert(key.to_string(), value.to_string());
                }
            }
        }
        self
    }

    /// Merges explicit key-value pairs (highest-priority programmatic layer).
    pub fn with_pairs<K, V, I>(mut self, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (k, v) in pairs {
            self.values.insert(k.into(), v.into());
        }
        self
    }

    /// Freezes the layers into an immutable [`Settings`].
    pub fn build(self) -> Settings {
        tracing::debug!(keys = self.values.len(), "settings resolved");
        Settings {
            values: self.values,
        }
    }
}

/// Flattens a TOML value into dotted-path string entries.
fn flatten(prefix: &str, value: &toml::Value, out: &mut HashMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (key, nested) in table {
                flatten(&format!("{prefix}.{key}"), nested, out);
            }
        }
        toml::Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                flatten(&format!("{prefix}.{idx}"), item, out);
            }
        }
        toml::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_toml_layer_flattens_nested_tables() {
        let settings = Settings::builder()
            .with_toml_str("[menu]\ntitle = \"Tools\"\nloop = false")
            .unwrap()
            .build();

        assert_eq!(settings.get("menu.title"), Some("Tools"));
        assert_eq!(settings.get("menu.loop"), Some("false"));
        assert_eq!(settings.get_parsed::<bool>("menu.loop"), Some(false));
    }

    #[test]
    fn test_later_layers_override_earlier_ones() {
        let settings = Settings::builder()
            .with_toml_str("[seed]\ncount = 3")
            .unwrap()
            .with_args(["--seed.count=10".to_string(), "ignored".to_string()])
            .build();

        assert_eq!(settings.get_parsed::<u32>("seed.count"), Some(10));
    }

    #[test]
    fn test_file_layer_and_missing_file_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[db]\nurl = \"postgres://localhost\"").unwrap();

        let settings = Settings::builder()
            .with_toml_file(file.path())
            .unwrap()
            .with_toml_file("/nonexistent/app.toml")
            .unwrap()
            .build();

        assert_eq!(settings.get("db.url"), Some("postgres://localhost"));
    }

    #[test]
    fn test_unparsable_value_treated_as_absent() {
        let settings = Settings::builder()
            .with_pairs([("seed.count", "lots")])
            .build();

        assert_eq!(settings.get("seed.count"), Some("lots"));
        assert_eq!(settings.get_parsed::<u32>("seed.count"), None);
    }

    #[test]
    fn test_arrays_flatten_to_indexed_keys() {
        let settings = Settings::builder()
            .with_toml_str("tags = [\"a\", \"b\"]")
            .unwrap()
            .build();

        assert_eq!(settings.get("tags.0"), Some("a"));
        assert_eq!(settings.get("tags.1"), Some("b"));
    }
}
