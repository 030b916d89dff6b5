//! Page sections

use serde::{Deserialize, Serialize};

/// A vertically stacked region of the page, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in document order
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Anchor id used in the DOM
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in document order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Layout-derived geometry of a section, read fresh on every scroll update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    /// Offset of the section's top edge from the document top (px)
    pub top: f64,
    /// Rendered height (px)
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    /// Whether `offset` falls in `[top - pretrigger, top - pretrigger + height)`
    pub fn contains(&self, offset: f64, pretrigger: f64) -> bool {
        let start = self.top - pretrigger;
        offset >= start && offset < start + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_in_document_order() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(SectionId::from_str(id.as_str()), Some(*id));
        }
        assert_eq!(SectionId::from_str("blog"), None);
    }

    #[test]
    fn test_contains_is_half_open() {
        let section = SectionBounds::new(SectionId::About, 900.0, 600.0);
        assert!(!section.contains(799.0, 100.0));
        assert!(section.contains(800.0, 100.0));
        assert!(section.contains(1399.0, 100.0));
        assert!(!section.contains(1400.0, 100.0));
    }

    #[test]
    fn test_zero_height_never_contains() {
        let section = SectionBounds::new(SectionId::Skills, 500.0, 0.0);
        assert!(!section.contains(400.0, 100.0));
    }
}
