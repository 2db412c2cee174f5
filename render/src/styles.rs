//! CSS for rendered tab pages.
//!
//! The base sheet covers typography and layout. The marker rules are
//! generated from the [`SelectorConfig`] so the stylesheet and the selector
//! always agree on which classes mean "active" and "visible".
//!
//! # Customization
//!
//! ```rust
//! use tabswitch_core::SelectorConfig;
//! use tabswitch_render::styles::page_css;
//!
//! let css = page_css(&SelectorConfig::default());
//! let combined = format!("{}\n{}", css, ".custom-class { color: red; }");
//! assert!(combined.contains(".tab-content.active"));
//! ```

use tabswitch_core::SelectorConfig;

/// Layout and typography, independent of the marker classes.
pub const BASE_CSS: &str = r#"
:root {
    --bg-black: #000000;
    --bg-dark: #0a0a0a;
    --text-bright: #a8a8a8;
    --text-dim: #707070;
    --text-muted: #404040;
    --border-visible: rgba(168, 168, 168, 0.2);
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 1000px;
    --accent-blue: #4f81e1;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-mono);
    background: var(--bg-black);
    color: var(--text-bright);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

::selection {
    background: rgba(168, 168, 168, 0.3);
    color: var(--text-bright);
}

/* Layout */
.tab-page {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 24px;
}

.tab-page h1 {
    font-size: 16px;
    font-weight: 500;
    margin: 0 0 8px 0;
}

/* Tabs */
.tab-bar {
    display: flex;
    gap: 6px;
    margin: 16px 0 8px 0;
    flex-wrap: wrap;
}

.tab-panels h2 {
    font-size: 13px;
    font-weight: 500;
    color: var(--text-dim);
}
"#;

/// Marker rules: hidden panels, visible panel, highlighted trigger.
pub fn marker_css(config: &SelectorConfig) -> String {
    let trigger = &config.trigger_class;
    let panel = &config.panel_class;
    let active = &config.active_class;
    let visible = &config.visible_class;

    format!(
        r#"
.{trigger} {{
    border: 1px solid var(--border-visible);
    background: var(--bg-dark);
    color: var(--text-dim);
    border-radius: 6px;
    padding: 6px 12px;
    cursor: pointer;
    font-family: var(--font-mono);
    font-size: 11px;
    transition: all 0.15s;
}}

.{trigger}:hover {{
    border-color: var(--text-muted);
    color: var(--text-bright);
}}

.{trigger}.{active} {{
    background: var(--accent-blue);
    color: #fff;
    border-color: var(--accent-blue);
}}

.{panel} {{
    display: none;
    padding: 12px 0;
}}

.{panel}.{visible} {{
    display: block;
}}
"#
    )
}

/// Complete stylesheet for a page rendered with `config`.
pub fn page_css(config: &SelectorConfig) -> String {
    format!("{}{}", BASE_CSS, marker_css(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_rules_follow_config() {
        let config = SelectorConfig {
            trigger_class: "tab".into(),
            panel_class: "pane".into(),
            active_class: "on".into(),
            visible_class: "shown".into(),
            ..Default::default()
        };
        let css = marker_css(&config);
        assert!(css.contains(".tab.on {"));
        assert!(css.contains(".pane {\n    display: none;"));
        assert!(css.contains(".pane.shown {\n    display: block;"));
        assert!(!css.contains("tab-content"));
    }

    #[test]
    fn stylesheet_has_no_markup_sensitive_characters() {
        // Emitted as a text node inside <style>.
        let css = page_css(&SelectorConfig::default());
        assert!(!css.contains('<'));
        assert!(!css.contains('>'));
        assert!(!css.contains('&'));
    }
}
