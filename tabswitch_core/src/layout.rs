//! Layout documents describing a tabbed page.
//!
//! A layout lists the triggers (tabs) and panels of one page together with
//! the markers they carry initially. The renderer turns it into HTML, the
//! simulator into a [`crate::memory::MemoryDocument`].
//!
//! # Example
//!
//! ```rust
//! use tabswitch_core::{TabLayout, check_layout};
//!
//! let layout = TabLayout::from_json_str(r#"{
//!     "tabs": [
//!         { "id": "tab-a", "label": "A", "target": "panel-a", "active": true },
//!         { "id": "tab-b", "label": "B", "target": "panel-b" }
//!     ],
//!     "panels": [
//!         { "id": "panel-a", "body": "first", "visible": true },
//!         { "id": "panel-b", "body": "second" }
//!     ]
//! }"#).unwrap();
//!
//! assert!(check_layout(&layout).is_empty());
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// One page of tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabLayout {
    pub title: Option<String>,
    pub tabs: Vec<TabSpec>,
    pub panels: Vec<PanelSpec>,
}

/// A trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSpec {
    pub id: String,
    pub label: String,
    /// Panel id written to `data-tab`; `None` omits the attribute.
    #[serde(default)]
    pub target: Option<String>,
    /// Carries the active marker before the first click.
    #[serde(default)]
    pub active: bool,
}

impl TabSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            target: Some(target.into()),
            active: false,
        }
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

/// A content panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Plain text; blank lines separate paragraphs.
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub visible: bool,
}

impl PanelSpec {
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn visible(mut self) -> Self {
        self.visible = true;
        self
    }

    /// Body split into non-empty paragraphs.
    ///
    /// Any blank or whitespace-only line ends a paragraph, with either LF or
    /// CRLF line endings.
    pub fn paragraphs(&self) -> Vec<String> {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in self.body.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join("\n").trim().to_string());
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join("\n").trim().to_string());
        }
        paragraphs
    }
}

impl TabLayout {
    /// Load a layout, picking the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, LayoutError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if ext != "json" && ext != "toml" {
            return Err(LayoutError::UnsupportedFormat(ext));
        }

        let content = std::fs::read_to_string(path).map_err(|source| LayoutError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let layout = if ext == "json" {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            tabs = layout.tabs.len(),
            panels = layout.panels.len(),
            "loaded layout"
        );
        Ok(layout)
    }

    pub fn from_json_str(content: &str) -> Result<Self, LayoutError> {
        serde_json::from_str(content).map_err(|e| LayoutError::Parse(e.to_string()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LayoutError> {
        toml::from_str(content).map_err(|e| LayoutError::Parse(e.to_string()))
    }

    pub fn panel(&self, id: &str) -> Option<&PanelSpec> {
        self.panels.iter().find(|p| p.id == id)
    }
}

/// How serious a [`LayoutIssue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// What is wrong with a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    DanglingTarget { tab: String, target: String },
    MissingTarget { tab: String },
    DuplicateTabId { id: String },
    DuplicatePanelId { id: String },
    MultipleActiveTabs { tabs: Vec<String> },
    MultipleVisiblePanels { panels: Vec<String> },
    /// The declared active tab does not point at the declared visible panel.
    InconsistentInitialState {
        tab: String,
        expected_panel: String,
    },
    OrphanPanel { panel: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutIssue {
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl LayoutIssue {
    fn error(kind: IssueKind) -> Self {
        Self {
            severity: Severity::Error,
            kind,
        }
    }

    fn warning(kind: IssueKind) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match &self.kind {
            IssueKind::DanglingTarget { tab, target } => {
                write!(f, "{}: tab `{}` targets missing panel `{}`", level, tab, target)
            }
            IssueKind::MissingTarget { tab } => {
                write!(f, "{}: tab `{}` has no data-tab target", level, tab)
            }
            IssueKind::DuplicateTabId { id } => write!(f, "{}: duplicate tab id `{}`", level, id),
            IssueKind::DuplicatePanelId { id } => {
                write!(f, "{}: duplicate panel id `{}`", level, id)
            }
            IssueKind::MultipleActiveTabs { tabs } => {
                write!(f, "{}: several tabs start active: {}", level, tabs.join(", "))
            }
            IssueKind::MultipleVisiblePanels { panels } => write!(
                f,
                "{}: several panels start visible: {}",
                level,
                panels.join(", ")
            ),
            IssueKind::InconsistentInitialState {
                tab,
                expected_panel,
            } => write!(
                f,
                "{}: active tab `{}` expects panel `{}` to start visible",
                level, tab, expected_panel
            ),
            IssueKind::OrphanPanel { panel } => {
                write!(f, "{}: no tab targets panel `{}`", level, panel)
            }
        }
    }
}

/// Lint a layout against the markup contract. Never fails; an empty result
/// means every trigger resolves and the initial state is consistent.
pub fn check_layout(layout: &TabLayout) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();

    let mut tab_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tab in &layout.tabs {
        *tab_counts.entry(tab.id.as_str()).or_default() += 1;
    }
    issues.extend(
        tab_counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(id, _)| LayoutIssue::error(IssueKind::DuplicateTabId { id: id.to_string() })),
    );

    let mut panel_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for panel in &layout.panels {
        *panel_counts.entry(panel.id.as_str()).or_default() += 1;
    }
    issues.extend(panel_counts.iter().filter(|(_, n)| **n > 1).map(|(id, _)| {
        LayoutIssue::error(IssueKind::DuplicatePanelId { id: id.to_string() })
    }));

    for tab in &layout.tabs {
        match &tab.target {
            None => issues.push(LayoutIssue::warning(IssueKind::MissingTarget {
                tab: tab.id.clone(),
            })),
            Some(target) if !panel_counts.contains_key(target.as_str()) => {
                issues.push(LayoutIssue::error(IssueKind::DanglingTarget {
                    tab: tab.id.clone(),
                    target: target.clone(),
                }))
            }
            Some(_) => {}
        }
    }

    let active: Vec<&TabSpec> = layout.tabs.iter().filter(|t| t.active).collect();
    if active.len() > 1 {
        issues.push(LayoutIssue::warning(IssueKind::MultipleActiveTabs {
            tabs: active.iter().map(|t| t.id.clone()).collect(),
        }));
    }

    let visible: Vec<&PanelSpec> = layout.panels.iter().filter(|p| p.visible).collect();
    if visible.len() > 1 {
        issues.push(LayoutIssue::warning(IssueKind::MultipleVisiblePanels {
            panels: visible.iter().map(|p| p.id.clone()).collect(),
        }));
    }

    if let [tab] = active.as_slice() {
        if let Some(target) = &tab.target {
            let resolves = panel_counts.contains_key(target.as_str());
            if resolves && !visible.iter().any(|p| &p.id == target) {
                issues.push(LayoutIssue::warning(IssueKind::InconsistentInitialState {
                    tab: tab.id.clone(),
                    expected_panel: target.clone(),
                }));
            }
        }
    }

    let targeted: HashSet<&str> = layout
        .tabs
        .iter()
        .filter_map(|t| t.target.as_deref())
        .collect();
    let mut seen = HashSet::new();
    for panel in &layout.panels {
        if !targeted.contains(panel.id.as_str()) && seen.insert(panel.id.as_str()) {
            issues.push(LayoutIssue::warning(IssueKind::OrphanPanel {
                panel: panel.id.clone(),
            }));
        }
    }

    issues
}
