//! Page construction
//!
//! Builds the whole document from [`SiteContent`] and registers every reveal
//! target with the [`RevealPlan`]. Behaviour (scroll, clicks, submission) is
//! wired up by the caller; the views only expose the elements it needs.

pub mod about;
pub mod animate;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::nav::{ScrollTracker, SectionId};
use crate::platform::dom::{append, attrs, el};
use crate::{MountError, platform};

pub use animate::RevealPlan;
pub use contact::ContactView;
pub use hero::HeroView;
pub use navbar::NavView;

/// Element the page is mounted into; falls back to `<body>`
pub const APP_ROOT_ID: &str = "app";

pub struct PageView {
    pub nav: NavView,
    pub hero: HeroView,
    pub contact: ContactView,
    /// Surface for the particle field
    pub canvas: HtmlCanvasElement,
    /// Section roots in document order
    pub sections: Vec<(SectionId, HtmlElement)>,
}

fn mount_point(document: &Document) -> Result<Element, MountError> {
    if let Some(root) = document.get_element_by_id(APP_ROOT_ID) {
        return Ok(root);
    }
    document
        .body()
        .map(Element::from)
        .ok_or_else(|| MountError::MissingElement(format!("#{} or body", APP_ROOT_ID)))
}

pub fn build(
    document: &Document,
    content: &SiteContent,
    config: &SiteConfig,
    tracker: &ScrollTracker,
    plan: &mut RevealPlan,
    year: u32,
) -> Result<PageView, MountError> {
    let root = mount_point(document)?;
    root.set_inner_html("");

    let canvas = el(document, "canvas", "particle-canvas")?;
    attrs(&canvas, &[("aria-hidden", "true")])?;
    let canvas: HtmlCanvasElement = canvas
        .dyn_into()
        .map_err(|_| MountError::Js("canvas has an unexpected type".to_string()))?;

    let threshold = config.reveal_threshold;
    let nav = navbar::build(document, &content.profile.short_name, &tracker.nav_items())?;

    let main = el(document, "main", "content")?;
    let hero = hero::build(document, &content.hero, &content.profile.name, plan, threshold)?;
    let about = about::build(document, content, config, plan)?;
    let skills = skills::build(document, &content.skills, plan, threshold)?;
    let projects = projects::build(document, &content.projects, plan, threshold)?;
    let (contact_section, contact) = contact::build(document, content, plan, threshold)?;
    append(&main, &[&hero.section, &about, &skills, &projects, &contact_section])?;

    let footer = footer::build(document, content, year)?;
    append(&root, &[&canvas, &nav.root, &main, &footer])?;

    let sections = vec![
        (SectionId::Home, hero.section.clone()),
        (SectionId::About, about),
        (SectionId::Skills, skills),
        (SectionId::Projects, projects),
        (SectionId::Contact, contact_section),
    ];

    log::info!(
        "Page built: {} sections, {} reveal targets",
        sections.len(),
        plan.registry.len()
    );

    Ok(PageView {
        nav,
        hero,
        contact,
        canvas,
        sections,
    })
}

impl PageView {
    pub fn section(&self, id: SectionId) -> Option<&HtmlElement> {
        self.sections.iter().find(|(s, _)| *s == id).map(|(_, el)| el)
    }

    /// Every in-page anchor that scrolls to a section
    pub fn section_links(&self, document: &Document) -> Vec<(SectionId, Element)> {
        let Ok(nodes) = document.query_selector_all("a[data-section]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|el| {
                let id = el.get_attribute("data-section").and_then(|s| SectionId::from_str(&s))?;
                Some((id, el))
            })
            .collect()
    }

    /// Re-read section geometry
    pub fn layout(&self, window: &web_sys::Window) -> Vec<crate::nav::SectionBounds> {
        platform::section_layout(window, &self.sections)
    }
}
