//! Reveal groups: registry targets bound to the elements they animate

use web_sys::{Element, HtmlElement};

use crate::MountError;
use crate::reveal::{Presentation, RevealId, RevealRegistry, Stagger, Timing, Variant};

/// One element and how it enters
pub struct Animated {
    pub element: HtmlElement,
    pub variant: Variant,
    pub timing: Timing,
}

/// A watched element and the members revealed with it
pub struct RevealGroup {
    pub id: RevealId,
    pub root: Element,
    pub members: Vec<Animated>,
}

/// Every reveal target on the page.
///
/// Members are put in their hidden presentation as soon as they are added;
/// [`RevealPlan::reveal`] swaps them to the visible one and lets the CSS
/// transition do the rest.
pub struct RevealPlan {
    pub registry: RevealRegistry,
    groups: Vec<RevealGroup>,
    reduced_motion: bool,
}

/// Write a presentation (and optionally its transition) to inline styles
pub fn apply(element: &HtmlElement, presentation: &Presentation, timing: Option<&Timing>) -> Result<(), MountError> {
    let style = element.style();
    match timing {
        Some(timing) => style.set_property("transition", &timing.transition())?,
        None => style.set_property("transition", "none")?,
    }
    style.set_property("opacity", &presentation.opacity.to_string())?;
    style.set_property("transform", &presentation.transform())?;
    Ok(())
}

impl RevealPlan {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            registry: RevealRegistry::new(),
            groups: Vec::new(),
            reduced_motion,
        }
    }

    /// Register `root` as a reveal target
    pub fn group(&mut self, key: &str, root: &Element, threshold: f64) -> RevealId {
        let id = self.registry.register(key, threshold);
        self.groups.push(RevealGroup {
            id,
            root: root.clone(),
            members: Vec::new(),
        });
        id
    }

    /// Animate `element` with the variant's own timing when `id` reveals
    pub fn animate(&mut self, id: RevealId, element: &HtmlElement, variant: Variant) -> Result<(), MountError> {
        let timing = variant.timing();
        self.push(id, element, variant, timing)
    }

    /// Animate `elements` in order, spaced by `stagger`
    pub fn stagger(
        &mut self,
        id: RevealId,
        elements: &[HtmlElement],
        variant: Variant,
        stagger: Stagger,
    ) -> Result<(), MountError> {
        for (index, element) in elements.iter().enumerate() {
            let timing = stagger.child_timing(index, &variant);
            self.push(id, element, variant, timing)?;
        }
        Ok(())
    }

    fn push(&mut self, id: RevealId, element: &HtmlElement, variant: Variant, timing: Timing) -> Result<(), MountError> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| MountError::MissingElement(format!("reveal group {}", id.index())))?;
        if !self.reduced_motion {
            apply(element, &variant.hidden(), Some(&timing))?;
        }
        group.members.push(Animated {
            element: element.clone(),
            variant,
            timing,
        });
        Ok(())
    }

    /// Show every member of the group
    pub fn reveal(&self, id: RevealId) {
        let Some(group) = self.groups.iter().find(|g| g.id == id) else {
            return;
        };
        for member in &group.members {
            let timing = (!self.reduced_motion).then_some(&member.timing);
            if let Err(e) = apply(&member.element, &member.variant.visible(), timing) {
                log::warn!("Reveal of {} failed: {}", id.index(), e);
            }
        }
        log::debug!("Revealed group {} ({} members)", id.index(), group.members.len());
    }

    /// Show everything now, e.g. when motion is reduced
    pub fn reveal_all(&mut self) {
        for id in self.registry.reveal_all() {
            self.reveal(id);
        }
    }

    /// Feed an observed visible fraction; reveals on the first crossing
    pub fn observe(&mut self, id: RevealId, fraction: f64) -> bool {
        if self.registry.observe(id, fraction) == crate::reveal::Transition::Revealed {
            self.reveal(id);
        }
        self.registry.is_revealed(id)
    }

    pub fn groups(&self) -> &[RevealGroup] {
        &self.groups
    }

    pub fn is_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}
