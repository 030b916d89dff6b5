//! Fixed header: logo, section links, progress bar and the mobile menu

use web_sys::{Document, HtmlElement};

use crate::MountError;
use crate::nav::{NavItem, SectionId};
use crate::platform::dom::{append, attrs, el, text, toggle_class};

pub struct NavView {
    pub root: HtmlElement,
    /// Desktop and mobile links for every section
    pub links: Vec<(SectionId, HtmlElement)>,
    pub progress: HtmlElement,
    pub menu_button: HtmlElement,
    pub close_button: HtmlElement,
    pub overlay: HtmlElement,
    pub mobile_menu: HtmlElement,
}

fn nav_link(document: &Document, class: &str, item: &NavItem) -> Result<HtmlElement, MountError> {
    let link = text(document, "a", class, item.label)?;
    let href = item.href();
    attrs(&link, &[("href", href.as_str()), ("data-section", item.target.as_str())])?;
    toggle_class(&link, "active", item.active);
    Ok(link)
}

pub fn build(document: &Document, short_name: &str, items: &[NavItem]) -> Result<NavView, MountError> {
    let root = el(document, "nav", "navbar")?;
    let container = el(document, "div", "nav-container")?;

    let logo = el(document, "a", "logo")?;
    attrs(&logo, &[("href", "#home"), ("data-section", SectionId::Home.as_str())])?;
    let logo_icon = text(document, "span", "logo-icon", "</>")?;
    let logo_name = text(document, "span", "logo-name", short_name)?;
    append(&logo, &[&logo_icon, &logo_name])?;

    let mut links = Vec::with_capacity(items.len() * 2);

    let desktop = el(document, "div", "nav-links")?;
    for item in items {
        let link = nav_link(document, "nav-link", item)?;
        append(&desktop, &[&link])?;
        links.push((item.target, link));
    }

    let menu_button = text(document, "button", "menu-button", "☰")?;
    attrs(&menu_button, &[("type", "button"), ("aria-label", "Open menu"), ("aria-expanded", "false")])?;

    append(&container, &[&logo, &desktop, &menu_button])?;

    let progress_track = el(document, "div", "progress-track")?;
    let progress = el(document, "div", "progress-bar")?;
    progress.style().set_property("width", "0%")?;
    append(&progress_track, &[&progress])?;

    let overlay = el(document, "div", "menu-overlay")?;
    let mobile_menu = el(document, "div", "mobile-menu")?;
    attrs(&mobile_menu, &[("aria-hidden", "true")])?;
    let close_button = text(document, "button", "menu-close", "✕")?;
    attrs(&close_button, &[("type", "button"), ("aria-label", "Close menu")])?;
    let mobile_links = el(document, "div", "mobile-links")?;
    for item in items {
        let link = nav_link(document, "mobile-link", item)?;
        append(&mobile_links, &[&link])?;
        links.push((item.target, link));
    }
    append(&mobile_menu, &[&close_button, &mobile_links])?;

    append(&root, &[&container, &progress_track, &overlay, &mobile_menu])?;

    Ok(NavView {
        root,
        links,
        progress,
        menu_button,
        close_button,
        overlay,
        mobile_menu,
    })
}

impl NavView {
    pub fn set_active(&self, active: SectionId) {
        for (id, link) in &self.links {
            toggle_class(link, "active", *id == active);
        }
    }

    pub fn set_scrolled(&self, scrolled: bool) {
        toggle_class(&self.root, "scrolled", scrolled);
    }

    pub fn set_progress(&self, percentage: f64) {
        let _ = self
            .progress
            .style()
            .set_property("width", &format!("{:.2}%", percentage));
    }

    pub fn set_menu_open(&self, open: bool) {
        toggle_class(&self.overlay, "open", open);
        toggle_class(&self.mobile_menu, "open", open);
        let _ = self
            .menu_button
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
        let _ = self
            .mobile_menu
            .set_attribute("aria-hidden", if open { "false" } else { "true" });
    }
}
