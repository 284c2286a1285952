//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Document, Window};

use crate::models::ViewportClass;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Current viewport size in CSS px, `(0, 0)` outside a browser.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|w| w.as_f64());
    let height = window.inner_height().ok().and_then(|h| h.as_f64());
    (width.unwrap_or(0.0), height.unwrap_or(0.0))
}

/// Width class of the current viewport.
///
/// Defaults to desktop when the width cannot be read.
pub fn viewport_class() -> ViewportClass {
    match window().and_then(|w| w.inner_width().ok()).and_then(|w| w.as_f64()) {
        Some(width) => ViewportClass::from_width(width),
        None => ViewportClass::Desktop,
    }
}

/// Scroll the window to the top without smooth-scrolling.
pub fn scroll_window_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
