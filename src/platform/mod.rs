//! Browser bindings
//!
//! Everything that talks to `window`/`document` lives here:
//! - `listener`: event listeners removed on drop
//! - `frame`: animation-frame scheduling (one-shot and cancellable loops)
//! - `observer`: intersection observers feeding the reveal registry
//! - `background`: the particle field's scoped browser resources
//! - `boundary`: top-level failure fallback
//! - `dom`: element construction helpers

pub mod background;
pub mod boundary;
pub mod dom;
pub mod frame;
pub mod listener;
pub mod observer;

use web_sys::{Document, Element, HtmlElement, Window};

use crate::MountError;
use crate::nav::{ScrollSample, SectionBounds, SectionId};
use crate::reveal::Rect;

pub use background::{BackgroundError, ParticleFieldHandle};
pub use frame::{AnimationLoop, request_frame_once};
pub use listener::EventListener;
pub use observer::RevealObserver;

pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::NoWindow)
}

pub fn document() -> Result<Document, MountError> {
    window()?.document().ok_or(MountError::NoDocument)
}

/// OS-level "reduce motion" preference
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Current scroll geometry of the page
pub fn scroll_sample(window: &Window) -> ScrollSample {
    let offset = window.scroll_y().unwrap_or(0.0);
    let (scroll_height, client_height) = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| (root.scroll_height() as f64, root.client_height() as f64))
        .unwrap_or((0.0, 0.0));
    ScrollSample::new(offset, scroll_height, client_height)
}

/// Visible viewport in client coordinates
pub fn viewport_rect(window: &Window) -> Rect {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Rect::new(0.0, 0.0, width, height)
}

/// Bounding box of an element in client coordinates
pub fn element_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Document-relative top edge of an element
pub fn document_top(window: &Window, element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
}

/// Fresh layout of every section, in document order
pub fn section_layout(window: &Window, sections: &[(SectionId, HtmlElement)]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|(id, el)| SectionBounds::new(*id, document_top(window, el), el.offset_height() as f64))
        .collect()
}
