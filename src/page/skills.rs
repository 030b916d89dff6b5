//! Skill categories with level bars, and the experience stats

use web_sys::{Document, HtmlElement};

use super::animate::RevealPlan;
use crate::MountError;
use crate::content::{SkillCategory, Skills, Stat};
use crate::nav::SectionId;
use crate::platform::dom::{append, attrs, el, section_header, text};
use crate::reveal::{Direction, Stagger, Variant};

fn icon(document: &Document, name: &str) -> Result<HtmlElement, MountError> {
    let icon = el(document, "span", &format!("icon icon-{}", name))?;
    attrs(&icon, &[("aria-hidden", "true")])?;
    Ok(icon)
}

fn category(document: &Document, category: &SkillCategory) -> Result<HtmlElement, MountError> {
    let card = el(document, "div", "skill-card glass")?;
    let head = el(document, "div", "skill-card-head")?;
    let title = text(document, "h3", "skill-card-title", &category.title)?;
    append(&head, &[&icon(document, &category.icon)?, &title])?;
    append(&card, &[&head])?;

    for skill in &category.skills {
        let row = el(document, "div", "skill")?;
        let label = el(document, "div", "skill-label")?;
        let name = text(document, "span", "skill-name", &skill.name)?;
        let level = text(document, "span", "skill-level", &format!("{}%", skill.level))?;
        append(&label, &[&name, &level])?;

        let track = el(document, "div", "skill-track")?;
        attrs(&track, &[("role", "progressbar"), ("aria-valuemin", "0"), ("aria-valuemax", "100")])?;
        track.set_attribute("aria-valuenow", &skill.level.to_string())?;
        let fill = el(document, "div", "skill-fill")?;
        fill.style().set_property("width", &format!("{}%", skill.level))?;
        append(&track, &[&fill])?;

        append(&row, &[&label, &track])?;
        append(&card, &[&row])?;
    }
    Ok(card)
}

fn stat(document: &Document, stat: &Stat) -> Result<HtmlElement, MountError> {
    let card = el(document, "div", "stat glass")?;
    let count = text(document, "span", "stat-count", &stat.count)?;
    let label = text(document, "span", "stat-label", &stat.label)?;
    append(&card, &[&icon(document, &stat.icon)?, &count, &label])?;
    Ok(card)
}

pub fn build(
    document: &Document,
    skills: &Skills,
    plan: &mut RevealPlan,
    threshold: f64,
) -> Result<HtmlElement, MountError> {
    let section = el(document, "section", "skills")?;
    section.set_id(SectionId::Skills.as_str());
    let header = section_header(document, &skills.heading, &skills.intro)?;

    let grid = el(document, "div", "skills-grid")?;
    let cards = skills
        .categories
        .iter()
        .map(|c| category(document, c))
        .collect::<Result<Vec<_>, _>>()?;
    for card in &cards {
        append(&grid, &[card])?;
    }

    let stats_row = el(document, "div", "stats")?;
    let stats = skills
        .stats
        .iter()
        .map(|s| stat(document, s))
        .collect::<Result<Vec<_>, _>>()?;
    for card in &stats {
        append(&stats_row, &[card])?;
    }

    append(&section, &[&header, &grid, &stats_row])?;

    let id = plan.group(SectionId::Skills.as_str(), &section, threshold);
    plan.animate(id, &header, Variant::text(0.0))?;
    plan.stagger(id, &cards, Variant::fade_in(Direction::Up, 0.0), Stagger::default())?;
    plan.stagger(id, &stats, Variant::scale_in(0.0), Stagger::new(0.1, 0.6))?;

    Ok(section)
}
