//! Tab navigation components

use leptos::prelude::*;
use tabswitch_core::{PanelSpec, TabSpec};

/// Join a base class with an optional marker.
fn class_list(base: &str, marker: &str, on: bool) -> String {
    if on {
        format!("{} {}", base, marker)
    } else {
        base.to_string()
    }
}

/// Tab bar with one trigger button per tab
#[component]
pub fn TabBar(
    /// Triggers in document order
    tabs: Vec<TabSpec>,
    /// Marker class shared by every trigger
    trigger_class: String,
    /// Class added to triggers that start active
    active_class: String,
) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {tabs.into_iter().map(|tab| {
                let class = class_list(&trigger_class, &active_class, tab.active);
                view! {
                    <button type="button" id=tab.id class=class data-tab=tab.target>
                        {tab.label}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </nav>
    }
}

/// Tab content panel
#[component]
pub fn TabPanel(
    /// Panel to render
    panel: PanelSpec,
    /// Marker class shared by every panel
    panel_class: String,
    /// Class added when the panel starts visible
    visible_class: String,
) -> impl IntoView {
    let class = class_list(&panel_class, &visible_class, panel.visible);
    let paragraphs = panel.paragraphs();

    view! {
        <section id=panel.id class=class>
            {panel.title.map(|title| view! { <h2>{title}</h2> })}
            {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
        </section>
    }
}
