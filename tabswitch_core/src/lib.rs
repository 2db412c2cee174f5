//! # tabswitch-core
//!
//! Toolkit-free tab selection. A page carries a set of **triggers** (tab
//! buttons with a `data-tab` attribute) and a set of **panels** (content
//! regions with an element id). Clicking a trigger clears every marker, then
//! marks the clicked trigger active and the panel its `data-tab` names
//! visible.
//!
//! ## Features
//!
//! - **Pure selection** - [`resolve_selection`] decides, nothing is mutated
//! - **Capability trait** - anything implementing [`MarkerElement`] can be a
//!   trigger or panel (DOM elements, the in-memory tree, test doubles)
//! - **Configurable markers** - class names and the dangling-target policy
//!   come from [`SelectorConfig`]
//! - **Layout linting** - [`check_layout`] finds dangling targets and
//!   inconsistent initial state before a page ships
//!
//! ## Quick Start
//!
//! ```rust
//! use tabswitch_core::{MemoryDocument, MemoryElement, SelectorConfig, TabSelector};
//!
//! let config = SelectorConfig::default();
//! let mut doc = MemoryDocument::new();
//! doc.push(MemoryElement::trigger("tab-a", "panel-a", &config));
//! doc.push(MemoryElement::trigger("tab-b", "panel-b", &config));
//! doc.push(MemoryElement::panel("panel-a", &config));
//! doc.push(MemoryElement::panel("panel-b", &config));
//!
//! let selector = TabSelector::discover(&doc, config);
//! selector.click_by_id("tab-b").unwrap();
//!
//! let state = selector.state();
//! assert_eq!(state.active_trigger(), Some("tab-b"));
//! assert_eq!(state.visible_panel(), Some("panel-b"));
//! ```
//!
//! ## Architecture
//!
//! - [`element`] - the [`MarkerElement`] / [`ElementSource`] capabilities
//! - [`selection`] - pure click resolution
//! - [`selector`] - [`TabSelector`]: discovery, select, apply
//! - [`config`] - [`SelectorConfig`] and [`DanglingPolicy`]
//! - [`layout`] - [`TabLayout`] documents and [`check_layout`]
//! - [`memory`] - in-memory element tree

pub mod config;
pub mod element;
pub mod error;
pub mod layout;
pub mod memory;
pub mod selection;
pub mod selector;

pub use config::{CONFIG_FILE_NAME, DanglingPolicy, SelectorConfig};
pub use element::{ElementSource, MarkerElement, TARGET_ATTRIBUTE};
pub use error::{ConfigError, LayoutError, SelectError};
pub use layout::{IssueKind, LayoutIssue, PanelSpec, Severity, TabLayout, TabSpec, check_layout};
pub use memory::{MemoryDocument, MemoryElement};
pub use selection::{Resolution, Selection, SelectionState, find_panel, resolve_selection};
pub use selector::TabSelector;
