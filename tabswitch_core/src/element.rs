//! The minimal element capability the selector works against.
//!
//! Anything that can report an id, read an attribute and toggle a class can
//! act as a trigger or a panel: a `web_sys::Element`, the in-memory
//! [`crate::memory::MemoryElement`], or a test double.

/// Attribute on a trigger naming the element id of the panel it controls.
pub const TARGET_ATTRIBUTE: &str = "data-tab";

/// Handle to a trigger or panel element.
///
/// Methods take `&self`: DOM handles are shared and mutate through the
/// document, not through Rust ownership.
pub trait MarkerElement {
    /// The element's own identifier (`id` attribute), if any.
    fn element_id(&self) -> Option<String>;

    /// Value of an arbitrary attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    fn has_class(&self, class: &str) -> bool;

    /// Add (`on == true`) or remove a marker class.
    fn set_class(&self, class: &str, on: bool);

    /// The panel id this element targets through [`TARGET_ATTRIBUTE`].
    fn target(&self) -> Option<String> {
        self.attribute(TARGET_ATTRIBUTE)
    }
}

/// Something elements can be discovered from, in document order.
pub trait ElementSource {
    type Element: MarkerElement;

    fn elements_with_class(&self, class: &str) -> Vec<Self::Element>;
}

/// Human-readable label for log lines and errors: the id, or the position.
pub(crate) fn describe<E: MarkerElement>(element: &E, index: usize) -> String {
    element
        .element_id()
        .unwrap_or_else(|| format!("#{}", index))
}
