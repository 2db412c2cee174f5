//! # tabswitch-render
//!
//! Leptos SSR renderer for tabbed pages.
//!
//! Produces markup that honors the tab contract: every trigger is a
//! `<button>` with the trigger class, an `id` and a `data-tab` attribute
//! naming its panel; every panel is a `<section>` with the panel class and
//! its own `id`. Initial markers come from the layout, and the stylesheet
//! hides every panel that lacks the visible marker.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabswitch_core::{PanelSpec, SelectorConfig, TabLayout, TabSpec};
//! use tabswitch_render::{render_page, WasmAssets};
//!
//! let layout = TabLayout {
//!     title: Some("Settings".into()),
//!     tabs: vec![TabSpec::new("tab-a", "General", "panel-a").active()],
//!     panels: vec![PanelSpec::new("panel-a", "Hello").visible()],
//! };
//!
//! let html = render_page(&layout, &SelectorConfig::default(), &WasmAssets::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("data-tab=\"panel-a\""));
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! No reactive runtime or hydration is involved; the page is static HTML.
//! Interactivity comes from the `tabswitch-wasm` module when
//! [`WasmAssets`] names its glue script.

#![warn(missing_docs)]

pub mod components;
pub mod styles;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tabswitch_core::{SelectorConfig, TabLayout};

/// Render a complete HTML page for a layout.
///
/// Returns a full document including `<!DOCTYPE html>`.
pub fn render_page(layout: &TabLayout, config: &SelectorConfig, assets: &WasmAssets) -> String {
    let doc = view! {
        <PageDocument layout=layout.clone() config=config.clone() assets=assets.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Location of the `tabswitch-wasm` JS glue module.
///
/// With `module` unset the page is static: the initial markers from the
/// layout are shown and clicks do nothing.
///
/// # Example
///
/// ```rust
/// use tabswitch_render::WasmAssets;
///
/// let assets = WasmAssets::module("./pkg/tabswitch_wasm.js");
/// assert!(assets.boot_script().unwrap().contains("attach()"));
/// assert!(WasmAssets::default().boot_script().is_none());
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct WasmAssets {
    /// Path or URL of the wasm-bindgen JS glue (`tabswitch_wasm.js`)
    pub module: Option<String>,
}

impl WasmAssets {
    /// Assets loading the glue module from `path`.
    pub fn module(path: impl Into<String>) -> Self {
        Self {
            module: Some(path.into()),
        }
    }

    /// Module script that loads the glue and wires up click listeners.
    ///
    /// The path is emitted as a JSON string literal, which is also a valid
    /// JS string literal.
    pub fn boot_script(&self) -> Option<String> {
        self.module
            .as_ref()
            .and_then(|path| serde_json::to_string(path).ok())
            .map(|specifier| {
                format!(
                    "import init, {{ attach }} from {};\nawait init();\nattach();\n",
                    specifier
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabswitch_core::{PanelSpec, TabSpec};

    fn layout() -> TabLayout {
        TabLayout {
            title: Some("Demo Page".into()),
            tabs: vec![
                TabSpec::new("tab-a", "Alpha", "panel-a").active(),
                TabSpec::new("tab-b", "Beta", "panel-b"),
            ],
            panels: vec![
                PanelSpec {
                    title: Some("Alpha panel".into()),
                    ..PanelSpec::new("panel-a", "first paragraph\n\nsecond paragraph").visible()
                },
                PanelSpec::new("panel-b", "beta body"),
            ],
        }
    }

    #[test]
    fn renders_empty_layout() {
        let html = render_page(
            &TabLayout::default(),
            &SelectorConfig::default(),
            &WasmAssets::default(),
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>Tabs</title>"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn renders_triggers_with_targets() {
        let html = render_page(&layout(), &SelectorConfig::default(), &WasmAssets::default());

        assert!(html.contains("Demo Page"));
        assert!(html.contains(r#"id="tab-a""#));
        assert!(html.contains(r#"class="tab-btn active""#));
        assert!(html.contains(r#"data-tab="panel-a""#));
        assert!(html.contains(r#"class="tab-btn""#));
        assert!(html.contains(r#"data-tab="panel-b""#));
        assert!(html.contains("Alpha"));
        assert!(html.contains("Beta"));
    }

    #[test]
    fn renders_panels_with_initial_visibility() {
        let html = render_page(&layout(), &SelectorConfig::default(), &WasmAssets::default());

        assert!(html.contains(r#"id="panel-a""#));
        assert!(html.contains(r#"class="tab-content active""#));
        assert!(html.contains(r#"class="tab-content""#));
        assert!(html.contains("<h2>Alpha panel</h2>"));
        assert!(html.contains("<p>first paragraph</p>"));
        assert!(html.contains("<p>second paragraph</p>"));
        assert!(html.contains("<p>beta body</p>"));
    }

    #[test]
    fn omits_data_tab_without_target() {
        let layout = TabLayout {
            tabs: vec![TabSpec {
                target: None,
                ..TabSpec::new("tab-n", "Nowhere", "")
            }],
            ..Default::default()
        };
        let html = render_page(&layout, &SelectorConfig::default(), &WasmAssets::default());

        assert!(html.contains(r#"id="tab-n""#));
        assert!(!html.contains("data-tab"));
    }

    #[test]
    fn uses_configured_marker_classes() {
        let config = SelectorConfig {
            trigger_class: "tab".into(),
            panel_class: "pane".into(),
            active_class: "on".into(),
            visible_class: "shown".into(),
            ..Default::default()
        };
        let html = render_page(&layout(), &config, &WasmAssets::default());

        assert!(html.contains(r#"class="tab on""#));
        assert!(html.contains(r#"class="pane shown""#));
        assert!(html.contains(".pane.shown {"));
        assert!(!html.contains("tab-btn"));
    }

    #[test]
    fn includes_boot_script_when_module_set() {
        let assets = WasmAssets::module("./pkg/tabswitch_wasm.js");
        let html = render_page(&layout(), &SelectorConfig::default(), &assets);

        assert!(html.contains(r#"<script type="module">"#));
        assert!(html.contains(r#"import init, { attach } from "./pkg/tabswitch_wasm.js";"#));
    }

    #[test]
    fn boot_script_text() {
        assert_eq!(
            WasmAssets::module("glue.js").boot_script().as_deref(),
            Some("import init, { attach } from \"glue.js\";\nawait init();\nattach();\n")
        );
    }

    #[test]
    fn boot_script_quotes_module_path() {
        let script = WasmAssets::module(r"C:\assets\it's\glue.js")
            .boot_script()
            .unwrap();
        assert_eq!(
            script.lines().next(),
            Some(r#"import init, { attach } from "C:\\assets\\it's\\glue.js";"#)
        );
    }
}
