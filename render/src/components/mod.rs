//! Leptos UI components for rendering tab pages.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── TabBar
//! │   └── <button class=trigger data-tab=..> (per tab)
//! └── TabPanel (per panel)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! embedded in a custom layout:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use tabswitch_render::components::{TabBar, TabPanel};
//!
//! view! {
//!     <TabBar tabs=layout.tabs trigger_class="tab-btn".into() active_class="active".into() />
//! }
//! ```

mod document;
mod tabs;

pub use document::PageDocument;
pub use tabs::{TabBar, TabPanel};
