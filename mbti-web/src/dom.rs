use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object, `None` outside a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
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

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    log::error!("{message}");
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
}

/// A pending `setTimeout` that is cleared when dropped.
///
/// Replacing a stored `Timeout` cancels the earlier one.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedule `callback` after `delay_ms`.
    ///
    /// Returns `None` (and logs) when no window is available or the browser
    /// refuses the timer.
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let Some(win) = window() else {
            console_error("Failed to schedule timer: window unavailable");
            return None;
        };
        let closure = Closure::once(callback);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(id) => Some(Self {
                id,
                _callback: closure,
            }),
            Err(err) => {
                console_error(&format!(
                    "Failed to schedule timer: {}",
                    js_error_message(&err)
                ));
                None
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}
