//! Navigation entries and the mobile menu

use super::section::SectionId;
use super::tracker::ScrollTracker;

/// A navigation entry pointing at a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub target: SectionId,
    pub label: &'static str,
    pub active: bool,
}

impl NavItem {
    pub fn new(target: SectionId, active: bool) -> Self {
        Self {
            target,
            label: target.label(),
            active,
        }
    }

    /// In-page anchor href
    pub fn href(&self) -> String {
        format!("#{}", self.target.as_str())
    }
}

/// Where a nav link scrolls to, never above the document top
pub fn scroll_target(section_top: f64, link_offset: f64) -> f64 {
    (section_top + link_offset).max(0.0)
}

/// Slide-in menu shown on narrow viewports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A link in the menu was chosen: activate its section and close
    pub fn choose(&mut self, tracker: &mut ScrollTracker, id: SectionId) {
        tracker.select(id);
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_href_and_label() {
        let item = NavItem::new(SectionId::Projects, false);
        assert_eq!(item.href(), "#projects");
        assert_eq!(item.label, "Projects");
    }

    #[test]
    fn test_scroll_target_accounts_for_header() {
        assert_eq!(scroll_target(980.0, -80.0), 900.0);
        assert_eq!(scroll_target(40.0, -80.0), 0.0);
    }

    #[test]
    fn test_mobile_menu_choose_closes() {
        let mut menu = MobileMenu::default();
        let mut tracker = ScrollTracker::default();
        assert!(menu.toggle());
        assert!(menu.is_open());
        menu.choose(&mut tracker, SectionId::Contact);
        assert!(!menu.is_open());
        assert_eq!(tracker.active(), SectionId::Contact);
    }
}
