use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wayfinder_core::{ClassList, Viewport};
use web_sys::{Document, Element, EventTarget, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Lift a JavaScript exception into an `anyhow` error.
pub fn js_err(value: JsValue) -> anyhow::Error {
    anyhow::anyhow!(js_error_message(&value))
}

/// All elements matching `selector`, in document order.
///
/// # Errors
/// Returns an error if the selector is invalid.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = doc.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attach a listener that stays alive for the rest of the page's lifetime.
///
/// # Errors
/// Returns an error if the browser rejects the listener.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<Function>())?;
    closure.forget();
    Ok(())
}

/// Class list of a live DOM element.
#[derive(Debug, Clone)]
pub struct DomClasses(Element);

impl DomClasses {
    #[must_use]
    pub const fn new(element: Element) -> Self {
        Self(element)
    }

    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.0
    }
}

impl ClassList for DomClasses {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log::warn!("could not add class {class}: {}", js_error_message(&err));
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            log::warn!("could not remove class {class}: {}", js_error_message(&err));
        }
    }
}

/// The browser viewport behind `window`.
#[derive(Debug, Clone)]
pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    #[must_use]
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) if y > 0.0 => y,
            _ => self
                .window
                .document()
                .and_then(|doc| doc.document_element())
                .map_or(0.0, |root| f64::from(root.scroll_top())),
        }
    }

    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }
}
