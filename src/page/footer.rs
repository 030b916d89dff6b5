//! Footer: brand, quick links, socials and the copyright line

use web_sys::{Document, HtmlElement};

use crate::MountError;
use crate::content::SiteContent;
use crate::nav::SectionId;
use crate::platform::dom::{append, attrs, el, link, text};

pub fn copyright(year: u32, name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, name)
}

pub fn build(document: &Document, content: &SiteContent, year: u32) -> Result<HtmlElement, MountError> {
    let footer = el(document, "footer", "footer")?;
    let grid = el(document, "div", "footer-grid")?;

    let brand = el(document, "div", "footer-brand")?;
    let name = text(document, "h3", "footer-name", &content.profile.name)?;
    let tagline = text(document, "p", "footer-tagline", &content.footer.tagline)?;
    append(&brand, &[&name, &tagline])?;

    let quick = el(document, "div", "footer-links")?;
    let quick_title = text(document, "h4", "footer-heading", "Quick Links")?;
    let list = el(document, "ul", "footer-list")?;
    for id in SectionId::ALL {
        let item = el(document, "li", "")?;
        let anchor = link(document, "footer-link", id.label(), &format!("#{}", id.as_str()))?;
        attrs(&anchor, &[("data-section", id.as_str())])?;
        append(&item, &[&anchor])?;
        append(&list, &[&item])?;
    }
    append(&quick, &[&quick_title, &list])?;

    let connect = el(document, "div", "footer-connect")?;
    let connect_title = text(document, "h4", "footer-heading", "Connect")?;
    let socials = el(document, "div", "socials")?;
    for social in &content.socials {
        let anchor = link(document, &format!("social social-{}", social.kind.as_str()), &social.label, &social.url)?;
        append(&socials, &[&anchor])?;
    }
    append(&connect, &[&connect_title, &socials])?;

    append(&grid, &[&brand, &quick, &connect])?;

    let bottom = el(document, "div", "footer-bottom")?;
    let line = text(document, "p", "copyright", &copyright(year, &content.profile.name))?;
    let legal = el(document, "div", "footer-legal")?;
    for l in &content.footer.links {
        append(&legal, &[&link(document, "footer-link", &l.label, &l.href)?])?;
    }
    append(&bottom, &[&line, &legal])?;

    append(&footer, &[&grid, &bottom])?;
    Ok(footer)
}
