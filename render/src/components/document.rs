//! Root document component - the complete HTML page

use super::{TabBar, TabPanel};
use crate::WasmAssets;
use crate::styles::page_css;
use leptos::prelude::*;
use tabswitch_core::{SelectorConfig, TabLayout};

const DEFAULT_TITLE: &str = "Tabs";

/// The complete HTML document for a tab page
#[component]
pub fn PageDocument(
    /// Tabs, panels and page title
    layout: TabLayout,
    /// Marker classes used for markup and stylesheet
    config: SelectorConfig,
    /// Optional wasm glue; omitted means a static page
    assets: WasmAssets,
) -> impl IntoView {
    let title = layout
        .title
        .clone()
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let css = page_css(&config);
    let boot = assets.boot_script();
    let panel_class = config.panel_class.clone();
    let visible_class = config.visible_class.clone();

    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title.clone()}</title>
                <style>{css}</style>
            </head>
            <body>
                <main class="tab-page">
                    <h1>{title}</h1>
                    <TabBar
                        tabs=layout.tabs
                        trigger_class=config.trigger_class
                        active_class=config.active_class
                    />
                    <div class="tab-panels">
                        {layout.panels.into_iter().map(|panel| {
                            view! {
                                <TabPanel
                                    panel=panel
                                    panel_class=panel_class.clone()
                                    visible_class=visible_class.clone()
                                />
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </main>
                {boot.map(|script| view! { <script type="module">{script}</script> })}
            </body>
        </html>
    }
}
