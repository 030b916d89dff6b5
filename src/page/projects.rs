//! Project cards

use web_sys::{Document, HtmlElement};

use super::animate::RevealPlan;
use crate::MountError;
use crate::content::{Project, Projects};
use crate::nav::SectionId;
use crate::platform::dom::{append, el, link, section_header, text};
use crate::reveal::{Direction, Stagger, Variant};

fn card(document: &Document, project: &Project) -> Result<HtmlElement, MountError> {
    let card = el(document, "article", "project-card glass")?;
    let title = text(document, "h3", "project-title", &project.title)?;
    let description = text(document, "p", "project-description", &project.description)?;

    let tech = el(document, "div", "project-tech")?;
    for name in &project.tech {
        append(&tech, &[&text(document, "span", "tag", name)?])?;
    }

    let links = el(document, "div", "project-links")?;
    if !project.repo.is_empty() {
        append(&links, &[&link(document, "project-link", "Code", &project.repo)?])?;
    }
    if !project.live.is_empty() {
        append(&links, &[&link(document, "project-link", "Live Demo", &project.live)?])?;
    }

    append(&card, &[&title, &description, &tech, &links])?;
    Ok(card)
}

pub fn build(
    document: &Document,
    projects: &Projects,
    plan: &mut RevealPlan,
    threshold: f64,
) -> Result<HtmlElement, MountError> {
    let section = el(document, "section", "projects")?;
    section.set_id(SectionId::Projects.as_str());
    let header = section_header(document, &projects.heading, &projects.intro)?;

    let grid = el(document, "div", "projects-grid")?;
    let cards = projects
        .items
        .iter()
        .map(|p| card(document, p))
        .collect::<Result<Vec<_>, _>>()?;
    for card in &cards {
        append(&grid, &[card])?;
    }
    append(&section, &[&header, &grid])?;

    let id = plan.group(SectionId::Projects.as_str(), &section, threshold);
    plan.animate(id, &header, Variant::text(0.0))?;
    plan.stagger(id, &cards, Variant::fade_in(Direction::Up, 0.0), Stagger::new(0.1, 0.0))?;

    Ok(section)
}
