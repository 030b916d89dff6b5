//! Landing section: greeting, typed role line and calls to action

use web_sys::{Document, HtmlElement};

use super::animate::RevealPlan;
use crate::MountError;
use crate::content::Hero;
use crate::nav::SectionId;
use crate::platform::dom::{append, attrs, el, link, text};
use crate::reveal::{Direction, Stagger, Variant};

pub struct HeroView {
    pub section: HtmlElement,
    /// Moves with the scroll parallax
    pub parallax: HtmlElement,
    /// Tracks the pointer spotlight
    pub card: HtmlElement,
    /// Typewriter output
    pub typed: HtmlElement,
}

pub fn build(
    document: &Document,
    hero: &Hero,
    name: &str,
    plan: &mut RevealPlan,
    threshold: f64,
) -> Result<HeroView, MountError> {
    let section = el(document, "section", "hero")?;
    section.set_id(SectionId::Home.as_str());

    let parallax = el(document, "div", "hero-parallax")?;
    let card = el(document, "div", "hero-card glass")?;
    let spotlight = el(document, "div", "spotlight")?;

    let greeting = text(document, "p", "hero-greeting", &hero.greeting)?;
    let title = text(document, "h1", "hero-title", name)?;

    let subtitle = el(document, "p", "hero-subtitle")?;
    let typed = el(document, "span", "typed")?;
    let cursor = text(document, "span", "cursor", "|")?;
    attrs(&cursor, &[("aria-hidden", "true")])?;
    append(&subtitle, &[&typed, &cursor])?;

    let description = text(document, "p", "hero-description", &hero.description)?;

    let actions = el(document, "div", "hero-actions")?;
    let primary = link(document, "btn btn-primary", &hero.primary_cta.label, &hero.primary_cta.href)?;
    let secondary = link(document, "btn btn-outline", &hero.secondary_cta.label, &hero.secondary_cta.href)?;
    for (anchor, href) in [(&primary, &hero.primary_cta.href), (&secondary, &hero.secondary_cta.href)] {
        if let Some(target) = href.strip_prefix('#').and_then(SectionId::from_str) {
            attrs(anchor, &[("data-section", target.as_str())])?;
        }
    }
    append(&actions, &[&primary, &secondary])?;

    append(&card, &[&spotlight, &greeting, &title, &subtitle, &description, &actions])?;
    append(&parallax, &[&card])?;
    append(&section, &[&parallax])?;

    let id = plan.group(SectionId::Home.as_str(), &section, threshold);
    plan.animate(id, &card, Variant::scale_in(0.5))?;
    plan.stagger(
        id,
        &[greeting, title, subtitle, description],
        Variant::fade_in(Direction::Up, 0.0),
        Stagger::new(0.2, 0.3),
    )?;
    plan.animate(id, &actions, Variant::fade_in(Direction::Up, 1.1))?;

    Ok(HeroView {
        section,
        parallax,
        card,
        typed,
    })
}

/// Pointer position inside the card as percentages, for the spotlight
pub fn spotlight_position(card: &HtmlElement, client_x: f64, client_y: f64) -> (f64, f64) {
    let rect = card.get_bounding_client_rect();
    let x = crate::map_range_clamped(client_x, (rect.left(), rect.right()), (0.0, 100.0));
    let y = crate::map_range_clamped(client_y, (rect.top(), rect.bottom()), (0.0, 100.0));
    (x, y)
}
