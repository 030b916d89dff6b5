//! Biography, highlight cards, tags and document links

use web_sys::{Document, HtmlElement};

use super::animate::RevealPlan;
use crate::MountError;
use crate::config::SiteConfig;
use crate::content::{About, Profile, SiteContent, SocialKind};
use crate::nav::SectionId;
use crate::platform::dom::{append, attrs, el, link, section_header, text};
use crate::reveal::{Direction, Stagger, Variant};

/// About reveals a little later than the other sections
pub const ABOUT_REVEAL_THRESHOLD: f64 = 0.2;

fn image(document: &Document, profile: &Profile, config: &SiteConfig) -> Result<HtmlElement, MountError> {
    let frame = el(document, "div", "profile-frame glass")?;
    let img = el(document, "img", "profile-image")?;
    let src = config.asset_url(&profile.image);
    attrs(&img, &[("src", src.as_str()), ("alt", profile.name.as_str()), ("loading", "lazy")])?;
    append(&frame, &[&img])?;
    Ok(frame)
}

fn highlights(document: &Document, about: &About) -> Result<Vec<HtmlElement>, MountError> {
    about
        .highlights
        .iter()
        .map(|h| -> Result<HtmlElement, MountError> {
            let card = el(document, "div", "highlight glass")?;
            let icon = el(document, "span", &format!("icon icon-{}", h.icon))?;
            attrs(&icon, &[("aria-hidden", "true")])?;
            let title = text(document, "h3", "highlight-title", &h.title)?;
            let caption = text(document, "p", "highlight-caption", &h.caption)?;
            append(&card, &[&icon, &title, &caption])?;
            Ok(card)
        })
        .collect()
}

pub fn build(
    document: &Document,
    content: &SiteContent,
    config: &SiteConfig,
    plan: &mut RevealPlan,
) -> Result<HtmlElement, MountError> {
    let about = &content.about;

    let section = el(document, "section", "about")?;
    section.set_id(SectionId::About.as_str());
    let header = section_header(document, &about.heading, "")?;

    let grid = el(document, "div", "about-grid")?;

    let left = el(document, "div", "about-media")?;
    let frame = image(document, &content.profile, config)?;
    let cards = highlights(document, about)?;
    let highlight_row = el(document, "div", "highlights")?;
    for card in &cards {
        append(&highlight_row, &[card])?;
    }
    append(&left, &[&frame, &highlight_row])?;

    let right = el(document, "div", "about-copy glass")?;
    let paragraphs = about
        .paragraphs
        .iter()
        .map(|p| text(document, "p", "about-paragraph", p))
        .collect::<Result<Vec<_>, _>>()?;
    for p in &paragraphs {
        append(&right, &[p])?;
    }

    let tag_row = el(document, "div", "tags")?;
    let tags = about
        .tags
        .iter()
        .map(|t| text(document, "span", "tag", t))
        .collect::<Result<Vec<_>, _>>()?;
    for tag in &tags {
        append(&tag_row, &[tag])?;
    }

    let buttons = el(document, "div", "about-actions")?;
    let resume_url = config.asset_url(&content.profile.resume);
    let resume = link(document, "btn btn-primary", "Download Resume", &resume_url)?;
    attrs(&resume, &[("download", "")])?;
    append(&buttons, &[&resume])?;
    for kind in [SocialKind::Github, SocialKind::Linkedin] {
        if let Some(social) = content.social(kind) {
            let anchor = link(document, "btn btn-outline", &social.label, &social.url)?;
            append(&buttons, &[&anchor])?;
        }
    }

    append(&right, &[&tag_row, &buttons])?;
    append(&grid, &[&left, &right])?;
    append(&section, &[&header, &grid])?;

    let id = plan.group(SectionId::About.as_str(), &section, ABOUT_REVEAL_THRESHOLD);
    plan.animate(id, &header, Variant::text(0.0))?;
    plan.animate(id, &frame, Variant::slide_in(Direction::Left, 0.2))?;
    plan.stagger(id, &cards, Variant::scale_in(0.0), Stagger::default())?;
    plan.stagger(id, &paragraphs, Variant::fade_in(Direction::Left, 0.2), Stagger::new(0.2, 0.0))?;
    plan.stagger(id, &tags, Variant::scale_in(0.0), Stagger::new(0.05, 0.3))?;
    plan.animate(id, &buttons, Variant::fade_in(Direction::Up, 0.6))?;

    Ok(section)
}
