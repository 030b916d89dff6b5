//! Top-level failure boundary
//!
//! A mount error or a panic anywhere replaces the page with a short message
//! and a reload button. Decorative failures are handled where they happen and
//! never reach this far.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

use crate::MountError;

pub const FALLBACK_MESSAGE: &str = "Something went wrong.";
pub const RELOAD_LABEL: &str = "Reload Page";

/// Route panics to the console, then show the fallback
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        show_fallback();
    }));
}

/// Report a failed mount through the boundary
pub fn guard(result: Result<(), MountError>) {
    if let Err(e) = result {
        log::error!("Page failed to mount: {}", e);
        show_fallback();
    }
}

pub fn show_fallback() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Err(e) = render_fallback(&document) {
        log::error!("Could not render the error fallback: {}", e);
    }
}

fn render_fallback(document: &Document) -> Result<(), MountError> {
    let body = document
        .body()
        .ok_or_else(|| MountError::MissingElement("body".to_string()))?;
    body.set_inner_html("");

    let container = document.create_element("div")?;
    container.set_class_name("error-boundary");
    container.set_attribute("role", "alert")?;

    let heading = document.create_element("h2")?;
    heading.set_text_content(Some(FALLBACK_MESSAGE));
    container.append_child(&heading)?;

    let button = document.create_element("button")?;
    button.set_class_name("btn btn-primary");
    button.set_attribute("type", "button")?;
    button.set_text_content(Some(RELOAD_LABEL));

    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    });
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // The page is gone at this point; the handler lives until reload
    closure.forget();

    container.append_child(&button)?;
    body.append_child(&container)?;
    Ok(())
}
