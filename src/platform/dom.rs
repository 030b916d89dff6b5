//! Element construction helpers

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::MountError;

/// Create `<tag class="...">`
pub fn el(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, MountError> {
    let element = document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::Js(format!("<{}> is not an HtmlElement", tag)))?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Create an element holding plain text
pub fn text(document: &Document, tag: &str, class: &str, content: &str) -> Result<HtmlElement, MountError> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(content));
    Ok(element)
}

/// Create an anchor. External links open in a new tab.
pub fn link(document: &Document, class: &str, label: &str, href: &str) -> Result<HtmlElement, MountError> {
    let anchor = text(document, "a", class, label)?;
    anchor.set_attribute("href", href)?;
    if href.starts_with("http") {
        anchor.set_attribute("target", "_blank")?;
        anchor.set_attribute("rel", "noopener noreferrer")?;
    }
    Ok(anchor)
}

pub fn attrs(element: &Element, pairs: &[(&str, &str)]) -> Result<(), MountError> {
    for (name, value) in pairs {
        element.set_attribute(name, value)?;
    }
    Ok(())
}

pub fn append(parent: &Element, children: &[&Element]) -> Result<(), MountError> {
    for child in children {
        parent.append_child(child)?;
    }
    Ok(())
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Section heading with the accent underline
pub fn section_header(document: &Document, title: &str, intro: &str) -> Result<HtmlElement, MountError> {
    let header = el(document, "div", "section-header")?;
    let heading = text(document, "h2", "section-title", title)?;
    append(&header, &[&heading])?;
    if !intro.is_empty() {
        let p = text(document, "p", "section-intro", intro)?;
        append(&header, &[&p])?;
    }
    Ok(header)
}
