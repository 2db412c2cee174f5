//! In-memory element tree.
//!
//! Stands in for the browser DOM in tests and in the CLI simulator. Handles
//! are cheap `Rc` clones of the same element, so a selector holding a handle
//! and a document holding the same handle observe the same classes.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::SelectorConfig;
use crate::element::{ElementSource, MarkerElement, TARGET_ATTRIBUTE};
use crate::layout::TabLayout;

#[derive(Debug, Default)]
struct ElementData {
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

/// Shared handle to one in-memory element.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    inner: Rc<RefCell<ElementData>>,
}

impl MemoryElement {
    pub fn new(id: impl Into<String>) -> Self {
        let element = Self::default();
        element.inner.borrow_mut().id = Some(id.into());
        element
    }

    /// Element without an `id` attribute.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_class(self, class: &str) -> Self {
        self.set_class(class, true);
        self
    }

    pub fn with_attribute(self, name: &str, value: impl Into<String>) -> Self {
        self.inner
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.into());
        self
    }

    /// Trigger element: `trigger_class` plus `data-tab=target`.
    pub fn trigger(id: &str, target: &str, config: &SelectorConfig) -> Self {
        Self::new(id)
            .with_class(&config.trigger_class)
            .with_attribute(TARGET_ATTRIBUTE, target)
    }

    pub fn panel(id: &str, config: &SelectorConfig) -> Self {
        Self::new(id).with_class(&config.panel_class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.clone()
    }

    /// Whether two handles point at the same element.
    pub fn same_element(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl MarkerElement for MemoryElement {
    fn element_id(&self) -> Option<String> {
        self.inner.borrow().id.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let data = self.inner.borrow();
        match name {
            "id" => data.id.clone(),
            _ => data.attributes.get(name).cloned(),
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    fn set_class(&self, class: &str, on: bool) {
        let mut data = self.inner.borrow_mut();
        let present = data.classes.iter().any(|c| c == class);
        if on && !present {
            data.classes.push(class.to_string());
        } else if !on && present {
            data.classes.retain(|c| c != class);
        }
    }
}

/// Flat, ordered collection of elements.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return a handle to it.
    pub fn push(&mut self, element: MemoryElement) -> MemoryElement {
        self.elements.push(element.clone());
        element
    }

    pub fn elements(&self) -> &[MemoryElement] {
        &self.elements
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&MemoryElement> {
        self.elements
            .iter()
            .find(|e| e.element_id().as_deref() == Some(id))
    }

    /// Build the markup a layout describes: triggers first, then panels,
    /// carrying the initial markers the layout declares.
    pub fn from_layout(layout: &TabLayout, config: &SelectorConfig) -> Self {
        let mut doc = Self::new();

        for tab in &layout.tabs {
            let mut element = MemoryElement::new(&tab.id).with_class(&config.trigger_class);
            if let Some(target) = &tab.target {
                element = element.with_attribute(TARGET_ATTRIBUTE, target);
            }
            if tab.active {
                element.set_class(&config.active_class, true);
            }
            doc.push(element);
        }

        for panel in &layout.panels {
            let element = MemoryElement::new(&panel.id).with_class(&config.panel_class);
            if panel.visible {
                element.set_class(&config.visible_class, true);
            }
            doc.push(element);
        }

        doc
    }
}

impl ElementSource for MemoryDocument {
    type Element = MemoryElement;

    fn elements_with_class(&self, class: &str) -> Vec<MemoryElement> {
        self.elements
            .iter()
            .filter(|e| e.has_class(class))
            .cloned()
            .collect()
    }
}
