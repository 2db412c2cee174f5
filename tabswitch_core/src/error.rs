//! Error types for selection, configuration and layout loading.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a click into a selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Click index outside the set of triggers discovered at construction.
    #[error("no trigger at index {0}")]
    UnknownTrigger(usize),

    /// No known trigger carries this element id.
    #[error("no trigger with id `{0}`")]
    UnknownTriggerId(String),

    /// The trigger's `data-tab` names no known panel and the dangling policy
    /// is `reject`.
    #[error("trigger {trigger} targets `{target}`, which matches no panel")]
    DanglingTarget { trigger: String, target: String },
}

/// Failure to load or validate a [`crate::SelectorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Failure to load a [`crate::TabLayout`] document.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse layout: {0}")]
    Parse(String),

    #[error("unsupported layout format `{0}` (expected .json or .toml)")]
    UnsupportedFormat(String),
}
