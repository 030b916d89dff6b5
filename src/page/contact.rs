//! Contact section: the form and the contact info card

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::animate::RevealPlan;
use crate::MountError;
use crate::contact::{ContactFields, ContactForm, Field, SubmissionStatus};
use crate::content::SiteContent;
use crate::nav::SectionId;
use crate::platform::dom::{append, attrs, el, link, section_header, text, toggle_class};
use crate::reveal::{Direction, Variant};

/// Form controls the submit handler reads and redraws
#[derive(Clone)]
pub struct ContactView {
    pub form: HtmlFormElement,
    pub name: HtmlInputElement,
    pub email: HtmlInputElement,
    pub message: HtmlTextAreaElement,
    pub submit: HtmlButtonElement,
    pub banner: HtmlElement,
}

fn cast<T: JsCast>(element: HtmlElement, what: &str) -> Result<T, MountError> {
    element
        .dyn_into::<T>()
        .map_err(|_| MountError::Js(format!("{} has an unexpected type", what)))
}

fn labelled(document: &Document, field: Field, control: &HtmlElement) -> Result<HtmlElement, MountError> {
    let group = el(document, "div", "form-group")?;
    let label = text(document, "label", "form-label", field.label())?;
    let id = format!("contact-{}", field.name());
    attrs(&label, &[("for", id.as_str())])?;
    attrs(control, &[("id", id.as_str()), ("name", field.name()), ("required", "")])?;
    append(&group, &[&label, control])?;
    Ok(group)
}

fn info_card(document: &Document, content: &SiteContent) -> Result<HtmlElement, MountError> {
    let copy = &content.contact;
    let card = el(document, "div", "contact-info glass")?;
    let heading = text(document, "h3", "contact-info-title", &copy.info_heading)?;
    let intro = text(document, "p", "contact-info-intro", &copy.info_intro)?;

    let details = el(document, "ul", "contact-details")?;
    let mailto = format!("mailto:{}", content.profile.email);
    let email = el(document, "li", "contact-detail")?;
    append(&email, &[&link(document, "contact-email", &content.profile.email, &mailto)?])?;
    let location = text(document, "li", "contact-detail", &content.profile.location)?;
    append(&details, &[&email, &location])?;

    let socials = el(document, "div", "socials")?;
    for social in &content.socials {
        let anchor = link(document, &format!("social social-{}", social.kind.as_str()), &social.label, &social.url)?;
        attrs(&anchor, &[("aria-label", social.label.as_str())])?;
        append(&socials, &[&anchor])?;
    }

    let note = text(document, "p", "contact-note", &copy.note)?;
    append(&card, &[&heading, &intro, &details, &socials, &note])?;
    Ok(card)
}

pub fn build(
    document: &Document,
    content: &SiteContent,
    plan: &mut RevealPlan,
    threshold: f64,
) -> Result<(HtmlElement, ContactView), MountError> {
    let section = el(document, "section", "contact")?;
    section.set_id(SectionId::Contact.as_str());
    let header = section_header(document, &content.contact.heading, &content.contact.intro)?;

    let grid = el(document, "div", "contact-grid")?;

    let form_el = el(document, "form", "contact-form glass")?;
    let name = el(document, "input", "form-input")?;
    attrs(&name, &[("type", "text"), ("placeholder", "Your name"), ("autocomplete", "name")])?;
    let email = el(document, "input", "form-input")?;
    attrs(&email, &[("type", "email"), ("placeholder", "you@example.com"), ("autocomplete", "email")])?;
    let message = el(document, "textarea", "form-input form-textarea")?;
    attrs(&message, &[("rows", "5"), ("placeholder", "Your message")])?;

    let banner = el(document, "div", "form-status")?;
    attrs(&banner, &[("role", "status"), ("aria-live", "polite")])?;
    banner.set_hidden(true);

    let submit = text(document, "button", "btn btn-primary form-submit", "Send Message")?;
    attrs(&submit, &[("type", "submit")])?;

    append(
        &form_el,
        &[
            &labelled(document, Field::Name, &name)?,
            &labelled(document, Field::Email, &email)?,
            &labelled(document, Field::Message, &message)?,
            &banner,
            &submit,
        ],
    )?;

    let info = info_card(document, content)?;
    append(&grid, &[&form_el, &info])?;
    append(&section, &[&header, &grid])?;

    let id = plan.group(SectionId::Contact.as_str(), &section, threshold);
    plan.animate(id, &header, Variant::text(0.0))?;
    plan.animate(id, &form_el, Variant::fade_in(Direction::Right, 0.2))?;
    plan.animate(id, &info, Variant::fade_in(Direction::Left, 0.4))?;

    let view = ContactView {
        form: cast(form_el, "contact form")?,
        name: cast(name, "name input")?,
        email: cast(email, "email input")?,
        message: cast(message, "message input")?,
        submit: cast(submit, "submit button")?,
        banner,
    };
    Ok((section, view))
}

impl ContactView {
    /// Current control values
    pub fn read(&self) -> ContactFields {
        let mut fields = ContactFields::default();
        fields.set(Field::Name, self.name.value());
        fields.set(Field::Email, self.email.value());
        fields.set(Field::Message, self.message.value());
        fields
    }

    /// Redraw button, banner and (after a send) the cleared inputs
    pub fn render(&self, form: &ContactForm) {
        self.submit.set_disabled(!form.submit_enabled());
        self.submit.set_text_content(Some(form.submit_label()));

        match form.status_message() {
            Some(message) => self.show_banner(message, form.succeeded()),
            None => self.banner.set_hidden(true),
        }

        if matches!(form.status(), SubmissionStatus::Sent) {
            let fields = form.fields();
            self.name.set_value(fields.get(Field::Name));
            self.email.set_value(fields.get(Field::Email));
            self.message.set_value(fields.get(Field::Message));
        }
    }

    /// Inline message, styled as success or error
    pub fn show_banner(&self, message: &str, success: bool) {
        self.banner.set_text_content(Some(message));
        toggle_class(&self.banner, "success", success);
        toggle_class(&self.banner, "error", !success);
        self.banner.set_hidden(false);
    }
}
