//! WASM module wiring tab selection into the browser DOM.
//!
//! Discovers the triggers and panels present in the document when
//! [`attach`] runs, attaches one `click` listener per trigger and delegates
//! every click to [`tabswitch_core::TabSelector`]. Triggers inserted later
//! are not picked up.
//!
//! ```js
//! import init, { attach } from "./pkg/tabswitch_wasm.js";
//! await init();
//! const tabs = attach();
//! tabs.click_id('tab-b');
//! ```

use std::rc::Rc;

use tabswitch_core::{ElementSource, MarkerElement, SelectorConfig, TabSelector};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

// ============================================================================
// DOM adapters
// ============================================================================

/// A DOM element acting as trigger or panel.
#[derive(Clone, Debug)]
pub struct DomElement(pub Element);

impl MarkerElement for DomElement {
    fn element_id(&self) -> Option<String> {
        let id = self.0.id();
        (!id.is_empty()).then_some(id)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_class(&self, class: &str, on: bool) {
        if let Err(err) = self.0.class_list().toggle_with_force(class, on) {
            web_sys::console::warn_2(&JsValue::from_str("tabswitch: failed to toggle class"), &err);
        }
    }
}

/// Element discovery over a document.
#[derive(Clone, Debug)]
pub struct DomSource(pub Document);

impl ElementSource for DomSource {
    type Element = DomElement;

    fn elements_with_class(&self, class: &str) -> Vec<DomElement> {
        // The collection is live; copy it so later insertions stay invisible.
        let collection = self.0.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(DomElement)
            .collect()
    }
}

// ============================================================================
// WASM Exports
// ============================================================================

struct Listener {
    target: Element,
    callback: Closure<dyn FnMut(Event)>,
}

fn remove_listeners(listeners: impl IntoIterator<Item = Listener>) {
    for listener in listeners {
        let _ = listener.target.remove_event_listener_with_callback(
            "click",
            listener.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Handle to the listeners installed by [`attach`].
///
/// Dropping the handle keeps the listeners working for the lifetime of the
/// page; call [`TabSwitcher::detach`] to remove them.
#[wasm_bindgen]
pub struct TabSwitcher {
    selector: Rc<TabSelector<DomElement>>,
    listeners: Vec<Listener>,
}

impl TabSwitcher {
    /// Discover elements in `document` and install one click listener per
    /// trigger.
    pub fn attach_to(document: &Document, config: SelectorConfig) -> Result<Self, JsValue> {
        let selector = Rc::new(TabSelector::discover(&DomSource(document.clone()), config));
        let mut listeners = Vec::with_capacity(selector.triggers().len());

        for (index, trigger) in selector.triggers().iter().enumerate() {
            let handler = Rc::clone(&selector);
            let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                if let Err(err) = handler.handle_click(index) {
                    web_sys::console::warn_1(&JsValue::from_str(&format!("tabswitch: {}", err)));
                }
            });
            if let Err(err) = trigger
                .0
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            {
                // Unhook the earlier triggers before their closures are freed.
                remove_listeners(listeners);
                return Err(err);
            }
            listeners.push(Listener {
                target: trigger.0.clone(),
                callback,
            });
        }

        Ok(Self {
            selector,
            listeners,
        })
    }

    pub fn selector(&self) -> &TabSelector<DomElement> {
        &self.selector
    }
}

#[wasm_bindgen]
impl TabSwitcher {
    /// Click the trigger at `index` (document order).
    pub fn click(&self, index: usize) -> Result<(), JsValue> {
        self.selector.handle_click(index).map(drop).map_err(js_error)
    }

    /// Click the trigger with element id `id`.
    pub fn click_id(&self, id: &str) -> Result<(), JsValue> {
        self.selector.click_by_id(id).map(drop).map_err(js_error)
    }

    /// Id of the single active trigger, if exactly one is marked.
    pub fn active_id(&self) -> Option<String> {
        self.selector.state().active_trigger().map(str::to_string)
    }

    pub fn visible_id(&self) -> Option<String> {
        self.selector.state().visible_panel().map(str::to_string)
    }

    pub fn trigger_count(&self) -> usize {
        self.selector.triggers().len()
    }

    pub fn panel_count(&self) -> usize {
        self.selector.panels().len()
    }

    /// Remove every click listener. Markers keep their current state.
    pub fn detach(&mut self) {
        remove_listeners(self.listeners.drain(..));
    }
}

impl Drop for TabSwitcher {
    fn drop(&mut self) {
        // Listeners outlive the handle unless detached explicitly.
        for listener in self.listeners.drain(..) {
            listener.callback.forget();
        }
    }
}

/// Attach to the current document using the default marker classes.
#[wasm_bindgen]
pub fn attach() -> Result<TabSwitcher, JsValue> {
    attach_config(SelectorConfig::default())
}

/// Attach with a JSON config, e.g. `{"panel_class":"pane","dangling":"fallback"}`.
#[wasm_bindgen]
pub fn attach_with(config_json: &str) -> Result<TabSwitcher, JsValue> {
    let config = SelectorConfig::from_json(config_json).map_err(js_error)?;
    attach_config(config)
}

fn attach_config(config: SelectorConfig) -> Result<TabSwitcher, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| js_error("no document available"))?;
    TabSwitcher::attach_to(&document, config)
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("tabswitch-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}
