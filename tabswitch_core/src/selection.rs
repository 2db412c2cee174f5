//! Pure selection logic: which trigger and which panel a click selects.
//!
//! Nothing here touches an element. The selector feeds in the clicked
//! trigger's target and the known panel ids, and applies the result in a
//! separate render step.

use serde::{Deserialize, Serialize};

use crate::config::DanglingPolicy;

/// Outcome of a click, as indices into the known trigger and panel lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub trigger: usize,
    /// `None` when no panel becomes visible.
    pub panel: Option<usize>,
}

/// How a click resolved against the known panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The target named an existing panel.
    Matched(Selection),
    /// The target was missing or named no panel; the policy decided the
    /// selection.
    Dangling(Selection),
    /// The target was dangling and the policy is [`DanglingPolicy::Reject`].
    Rejected,
}

impl Resolution {
    /// The selection to render, if any.
    pub fn selection(&self) -> Option<Selection> {
        match self {
            Resolution::Matched(selection) | Resolution::Dangling(selection) => Some(*selection),
            Resolution::Rejected => None,
        }
    }
}

/// Index of the first panel whose id equals `target`.
pub fn find_panel<S: AsRef<str>>(target: &str, panel_ids: &[Option<S>]) -> Option<usize> {
    panel_ids
        .iter()
        .position(|id| id.as_ref().is_some_and(|id| id.as_ref() == target))
}

/// Decide the selection produced by clicking trigger `clicked`.
///
/// `target` is the trigger's `data-tab` value and `panel_ids` the ids of
/// the known panels in document order.
pub fn resolve_selection<S: AsRef<str>>(
    clicked: usize,
    target: Option<&str>,
    panel_ids: &[Option<S>],
    policy: DanglingPolicy,
) -> Resolution {
    if let Some(panel) = target.and_then(|t| find_panel(t, panel_ids)) {
        return Resolution::Matched(Selection {
            trigger: clicked,
            panel: Some(panel),
        });
    }

    match policy {
        DanglingPolicy::Silent | DanglingPolicy::Warn => Resolution::Dangling(Selection {
            trigger: clicked,
            panel: None,
        }),
        DanglingPolicy::Fallback => Resolution::Dangling(Selection {
            trigger: clicked,
            panel: (!panel_ids.is_empty()).then_some(0),
        }),
        DanglingPolicy::Reject => Resolution::Rejected,
    }
}

/// Observable snapshot of the markers: ids of active triggers and visible
/// panels. Elements without an id are listed by position (`#2`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub active: Vec<String>,
    pub visible: Vec<String>,
}

impl SelectionState {
    /// The single active trigger, when the invariant holds.
    pub fn active_trigger(&self) -> Option<&str> {
        match self.active.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn visible_panel(&self) -> Option<&str> {
        match self.visible.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

impl std::fmt::Display for SelectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "active=[{}] visible=[{}]",
            self.active.join(", "),
            self.visible.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels() -> Vec<Option<&'static str>> {
        vec![Some("panel-a"), Some("panel-b")]
    }

    #[test]
    fn matches_target_panel() {
        let resolution = resolve_selection(1, Some("panel-b"), &panels(), DanglingPolicy::Silent);
        assert_eq!(
            resolution,
            Resolution::Matched(Selection {
                trigger: 1,
                panel: Some(1)
            })
        );
    }

    #[test]
    fn first_duplicate_panel_wins() {
        let ids = vec![None, Some("dup"), Some("dup")];
        assert_eq!(find_panel("dup", &ids), Some(1));
    }

    #[test]
    fn silent_dangling_shows_no_panel() {
        let resolution = resolve_selection(0, Some("missing"), &panels(), DanglingPolicy::Silent);
        assert_eq!(
            resolution,
            Resolution::Dangling(Selection {
                trigger: 0,
                panel: None
            })
        );
    }

    #[test]
    fn missing_attribute_is_dangling() {
        let resolution = resolve_selection(0, None, &panels(), DanglingPolicy::Warn);
        assert_eq!(resolution.selection().and_then(|s| s.panel), None);
        assert!(matches!(resolution, Resolution::Dangling(_)));
    }

    #[test]
    fn fallback_shows_first_panel() {
        let resolution = resolve_selection(1, Some("missing"), &panels(), DanglingPolicy::Fallback);
        assert_eq!(
            resolution.selection(),
            Some(Selection {
                trigger: 1,
                panel: Some(0)
            })
        );
    }

    #[test]
    fn fallback_without_panels_shows_nothing() {
        let none: Vec<Option<&str>> = Vec::new();
        let resolution = resolve_selection(0, Some("missing"), &none, DanglingPolicy::Fallback);
        assert_eq!(resolution.selection().and_then(|s| s.panel), None);
    }

    #[test]
    fn reject_produces_no_selection() {
        let resolution = resolve_selection(0, Some("missing"), &panels(), DanglingPolicy::Reject);
        assert_eq!(resolution, Resolution::Rejected);
        assert_eq!(resolution.selection(), None);
    }

    #[test]
    fn reject_still_allows_valid_targets() {
        let resolution = resolve_selection(0, Some("panel-a"), &panels(), DanglingPolicy::Reject);
        assert!(matches!(resolution, Resolution::Matched(_)));
    }

    #[test]
    fn state_display_and_accessors() {
        let state = SelectionState {
            active: vec!["tab-a".into()],
            visible: vec![],
        };
        assert_eq!(state.to_string(), "active=[tab-a] visible=[]");
        assert_eq!(state.active_trigger(), Some("tab-a"));
        assert_eq!(state.visible_panel(), None);
    }
}
