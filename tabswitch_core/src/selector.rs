//! The tab selector.
//!
//! Holds the triggers and panels discovered at construction and keeps at
//! most one of each marked. A click is split in two: [`TabSelector::select`]
//! decides, [`TabSelector::apply`] renders.

use crate::config::{DanglingPolicy, SelectorConfig};
use crate::element::{ElementSource, MarkerElement, describe};
use crate::error::SelectError;
use crate::selection::{Resolution, Selection, SelectionState, resolve_selection};

/// One-of-N selection over a fixed set of trigger and panel handles.
#[derive(Debug, Clone)]
pub struct TabSelector<E> {
    triggers: Vec<E>,
    panels: Vec<E>,
    config: SelectorConfig,
}

impl<E: MarkerElement> TabSelector<E> {
    /// Build a selector over explicitly supplied handles.
    pub fn new(triggers: Vec<E>, panels: Vec<E>, config: SelectorConfig) -> Self {
        Self {
            triggers,
            panels,
            config,
        }
    }

    /// Capture every element currently carrying the trigger and panel
    /// classes. Elements added to `source` afterwards are never seen.
    pub fn discover<S>(source: &S, config: SelectorConfig) -> Self
    where
        S: ElementSource<Element = E>,
    {
        let triggers = source.elements_with_class(&config.trigger_class);
        let panels = source.elements_with_class(&config.panel_class);
        tracing::debug!(
            triggers = triggers.len(),
            panels = panels.len(),
            trigger_class = %config.trigger_class,
            panel_class = %config.panel_class,
            "discovered tab elements"
        );
        Self::new(triggers, panels, config)
    }

    pub fn triggers(&self) -> &[E] {
        &self.triggers
    }

    pub fn panels(&self) -> &[E] {
        &self.panels
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Position of the first trigger with this element id.
    pub fn trigger_index(&self, id: &str) -> Option<usize> {
        self.triggers
            .iter()
            .position(|t| t.element_id().as_deref() == Some(id))
    }

    /// Decide what clicking trigger `index` selects, without touching any
    /// element.
    pub fn select(&self, index: usize) -> Result<Selection, SelectError> {
        let trigger = self
            .triggers
            .get(index)
            .ok_or(SelectError::UnknownTrigger(index))?;
        let target = trigger.target();
        let panel_ids: Vec<Option<String>> = self.panels.iter().map(|p| p.element_id()).collect();

        match resolve_selection(index, target.as_deref(), &panel_ids, self.config.dangling) {
            Resolution::Matched(selection) => Ok(selection),
            Resolution::Dangling(selection) => {
                let trigger = describe(trigger, index);
                let target = target.unwrap_or_default();
                if self.config.dangling == DanglingPolicy::Warn {
                    tracing::warn!(%trigger, %target, "tab target matches no panel");
                } else {
                    tracing::debug!(
                        %trigger,
                        %target,
                        policy = ?self.config.dangling,
                        "tab target matches no panel"
                    );
                }
                Ok(selection)
            }
            Resolution::Rejected => Err(SelectError::DanglingTarget {
                trigger: describe(trigger, index),
                target: target.unwrap_or_default(),
            }),
        }
    }

    /// Render a selection: clear every marker, then mark the selected
    /// trigger and panel.
    pub fn apply(&self, selection: &Selection) {
        for trigger in &self.triggers {
            trigger.set_class(&self.config.active_class, false);
        }
        for panel in &self.panels {
            panel.set_class(&self.config.visible_class, false);
        }

        if let Some(trigger) = self.triggers.get(selection.trigger) {
            trigger.set_class(&self.config.active_class, true);
        }
        if let Some(panel) = selection.panel.and_then(|i| self.panels.get(i)) {
            panel.set_class(&self.config.visible_class, true);
        }
    }

    /// Click handler: select, then render. A rejected click leaves every
    /// marker as it was.
    pub fn handle_click(&self, index: usize) -> Result<Selection, SelectError> {
        let selection = self.select(index)?;
        self.apply(&selection);
        tracing::debug!(
            trigger = selection.trigger,
            panel = ?selection.panel,
            "tab selected"
        );
        Ok(selection)
    }

    pub fn click_by_id(&self, id: &str) -> Result<Selection, SelectError> {
        let index = self
            .trigger_index(id)
            .ok_or_else(|| SelectError::UnknownTriggerId(id.to_string()))?;
        self.handle_click(index)
    }

    /// Read the markers back from the elements.
    pub fn state(&self) -> SelectionState {
        let marked = |elements: &[E], class: &str| -> Vec<String> {
            elements
                .iter()
                .enumerate()
                .filter(|(_, e)| e.has_class(class))
                .map(|(i, e)| describe(e, i))
                .collect()
        };
        SelectionState {
            active: marked(&self.triggers, &self.config.active_class),
            visible: marked(&self.panels, &self.config.visible_class),
        }
    }
}
