use log::{error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlElement, Window};

use crate::config::MOBILE_MEDIA_QUERY;

/// A window event subscription that lives exactly as long as this value.
/// Create it in a mount effect and drop it from the effect's cleanup.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window,
            event,
            callback,
        })
    }

    /// Runs the handler once right away, for the initial check.
    pub fn fire(&self) {
        if let Err(e) = self
            .callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL)
        {
            error!("{} handler failed on first run: {:?}", self.event, e);
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            error!("failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

/// Subscribes to `event`, logging instead of failing when there is no window.
pub fn listen(event: &'static str, handler: impl FnMut() + 'static) -> Option<WindowListener> {
    match WindowListener::new(event, handler) {
        Ok(listener) => Some(listener),
        Err(e) => {
            error!("could not subscribe to {}: {:?}", event, e);
            None
        }
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> Option<f64> {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
}

pub fn is_mobile_viewport() -> bool {
    window()
        .and_then(|w| w.match_media(MOBILE_MEDIA_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn location_hash() -> Option<String> {
    window()
        .and_then(|w| w.location().hash().ok())
        .filter(|hash| !hash.is_empty())
}

/// Brings the element with `id` into view. Returns false when it is missing.
pub fn scroll_to_anchor(id: &str) -> bool {
    match window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        Some(element) => {
            element.scroll_into_view_with_bool(true);
            true
        }
        None => {
            warn!("no #{} to scroll to", id);
            false
        }
    }
}

/// Stops the page behind an open mobile menu from scrolling until dropped.
pub struct BodyScrollLock {
    body: HtmlElement,
}

impl BodyScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = window()?.document()?.body()?;
        body.style().set_property("overflow", "hidden").ok()?;
        Some(Self { body })
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        if let Err(e) = self.body.style().set_property("overflow", "auto") {
            error!("failed to restore body scrolling: {:?}", e);
        }
    }
}
