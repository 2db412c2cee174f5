//! Configuration file support for tabswitch.
//!
//! Loads optional `tabswitch.toml`. Every field has a default matching the
//! conventional markup (`tab-btn` / `tab-content` / `active`), so an empty
//! file and a missing file both produce the same config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "tabswitch.toml";

/// What to do when a clicked trigger targets a panel that does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    /// Activate the trigger, leave every panel hidden.
    #[default]
    Silent,
    /// Same state as `Silent`, but log a warning.
    Warn,
    /// Activate the trigger and show the first known panel instead.
    Fallback,
    /// Leave the UI untouched and report an error.
    Reject,
}

/// Marker classes and dangling-target behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Class shared by all triggers
    pub trigger_class: String,
    /// Class shared by all panels
    pub panel_class: String,
    /// Class set on the active trigger
    pub active_class: String,
    /// Class set on the visible panel
    pub visible_class: String,
    pub dangling: DanglingPolicy,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            trigger_class: "tab-btn".to_string(),
            panel_class: "tab-content".to_string(),
            active_class: "active".to_string(),
            visible_class: "active".to_string(),
            dangling: DanglingPolicy::Silent,
        }
    }
}

impl SelectorConfig {
    /// Load config from `tabswitch.toml` in the given directory.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        Self::load_from_path(&dir.join(CONFIG_FILE_NAME))
    }

    /// Load config from a specific path.
    ///
    /// A missing file yields the default config. A file that exists but
    /// cannot be read, parsed or validated is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse a config from a JSON string (used by the browser binding).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Class names must be plain CSS identifiers (`[A-Za-z0-9_-]`), and a
    /// state class may not double as a marker class.
    ///
    /// `active_class` and `visible_class` may coincide: they land on
    /// disjoint element sets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("trigger_class", &self.trigger_class),
            ("panel_class", &self.panel_class),
            ("active_class", &self.active_class),
            ("visible_class", &self.visible_class),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", field)));
            }
            if !value.chars().all(is_class_char) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a single class name of [A-Za-z0-9_-], got `{}`",
                    field, value
                )));
            }
        }

        // Clearing a state class must never strip a marker class.
        for (a, a_value, b, b_value) in [
            ("trigger_class", &self.trigger_class, "panel_class", &self.panel_class),
            ("active_class", &self.active_class, "trigger_class", &self.trigger_class),
            ("active_class", &self.active_class, "panel_class", &self.panel_class),
            ("visible_class", &self.visible_class, "panel_class", &self.panel_class),
            ("visible_class", &self.visible_class, "trigger_class", &self.trigger_class),
        ] {
            if a_value == b_value {
                return Err(ConfigError::Invalid(format!(
                    "{} and {} must differ, both are `{}`",
                    a, b, a_value
                )));
            }
        }
        Ok(())
    }
}

fn is_class_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SelectorConfig::default();
        assert_eq!(config.trigger_class, "tab-btn");
        assert_eq!(config.panel_class, "tab-content");
        assert_eq!(config.active_class, "active");
        assert_eq!(config.visible_class, "active");
        assert_eq!(config.dangling, DanglingPolicy::Silent);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = SelectorConfig::load(dir.path()).unwrap();
        assert_eq!(config, SelectorConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        writeln!(
            file,
            r#"
panel_class = "pane"
dangling = "fallback"
"#
        )
        .unwrap();

        let config = SelectorConfig::load(dir.path()).unwrap();
        assert_eq!(config.panel_class, "pane");
        assert_eq!(config.trigger_class, "tab-btn");
        assert_eq!(config.dangling, DanglingPolicy::Fallback);
    }

    #[test]
    fn test_load_malformed_config_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "dangling = [1, 2").unwrap();

        let err = SelectorConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_policy_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "dangling = \"explode\"").unwrap();

        assert!(SelectorConfig::load_from_path(&path).is_err());
    }

    #[test]
    fn test_validate_rejects_whitespace_class() {
        let config = SelectorConfig {
            active_class: "is active".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("active_class"));
    }

    #[test]
    fn test_validate_rejects_empty_class() {
        let config = SelectorConfig {
            trigger_class: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_css_metacharacters() {
        for bad in ["tab.btn", "tab#btn", "tab:hover", "a>b", "x\"y"] {
            let config = SelectorConfig {
                trigger_class: bad.into(),
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("trigger_class"), "{}: {}", bad, err);
        }
    }

    #[test]
    fn test_validate_accepts_dashes_and_underscores() {
        let config = SelectorConfig {
            trigger_class: "tab_btn-2".into(),
            panel_class: "Pane-X".into(),
            active_class: "is-on".into(),
            visible_class: "is_shown".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_allows_shared_state_class() {
        // Defaults use `active` for both triggers and panels.
        assert!(SelectorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_visible_equal_to_panel_marker() {
        let config = SelectorConfig {
            panel_class: "pane".into(),
            visible_class: "pane".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("visible_class and panel_class"));
    }

    #[test]
    fn test_validate_rejects_state_class_equal_to_marker() {
        let cases = [
            SelectorConfig {
                active_class: "tab-btn".into(),
                ..Default::default()
            },
            SelectorConfig {
                active_class: "tab-content".into(),
                ..Default::default()
            },
            SelectorConfig {
                visible_class: "tab-btn".into(),
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }

    #[test]
    fn test_validate_rejects_shared_marker_class() {
        let config = SelectorConfig {
            trigger_class: "tab".into(),
            panel_class: "tab".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("trigger_class and panel_class"));
    }

    #[test]
    fn test_load_rejects_overlapping_classes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "panel_class = \"pane\"\nvisible_class = \"pane\"\n").unwrap();

        let err = SelectorConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_json() {
        let config = SelectorConfig::from_json(r#"{"dangling":"reject"}"#).unwrap();
        assert_eq!(config.dangling, DanglingPolicy::Reject);
        assert_eq!(config.panel_class, "tab-content");
    }
}
