//! Scroll tracker: single owner of the page's scroll and navigation state

use super::menu::NavItem;
use super::scroll::{ScrollSample, ScrollState};
use super::section::{SectionBounds, SectionId};
use crate::config::SiteConfig;
use crate::consts::*;

/// First section, in document order, whose pre-triggered range holds `offset`
pub fn active_section(sections: &[SectionBounds], offset: f64, pretrigger: f64) -> Option<SectionId> {
    sections
        .iter()
        .find(|s| s.contains(offset, pretrigger))
        .map(|s| s.id)
}

/// What a scroll update changed, so the view only touches what it must
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollUpdate {
    /// Current progress (0-100), always reported
    pub percentage: f64,
    /// New value of the scrolled flag, if it flipped
    pub scrolled: Option<bool>,
    /// Newly active section, if it changed
    pub active: Option<SectionId>,
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    state: ScrollState,
    active: SectionId,
    threshold: f64,
    pretrigger: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(NAV_SCROLLED_THRESHOLD, SECTION_PRETRIGGER_OFFSET)
    }
}

impl ScrollTracker {
    pub fn new(threshold: f64, pretrigger: f64) -> Self {
        Self {
            state: ScrollState::default(),
            active: SectionId::ALL[0],
            threshold,
            pretrigger,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.scroll_threshold, config.pretrigger_offset)
    }

    /// Apply one scroll signal.
    ///
    /// Order matters: offset and progress first, then the scrolled flag, then
    /// the active section. An offset that matches no section keeps the
    /// previous one active.
    pub fn on_scroll(&mut self, sample: ScrollSample, layout: &[SectionBounds]) -> ScrollUpdate {
        let was_scrolled = self.state.past_threshold;
        self.state.update(&sample, self.threshold);

        let mut active = None;
        if let Some(id) = active_section(layout, self.state.offset, self.pretrigger) {
            if id != self.active {
                log::debug!("Active section: {} -> {}", self.active.as_str(), id.as_str());
                self.active = id;
                active = Some(id);
            }
        }

        ScrollUpdate {
            percentage: self.state.percentage,
            scrolled: (was_scrolled != self.state.past_threshold).then_some(self.state.past_threshold),
            active,
        }
    }

    /// Explicitly activate a section (nav link click). Returns true if it changed.
    pub fn select(&mut self, id: SectionId) -> bool {
        let changed = self.active != id;
        self.active = id;
        changed
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Navigation entries with their derived active flag
    pub fn nav_items(&self) -> Vec<NavItem> {
        SectionId::ALL
            .iter()
            .map(|&id| NavItem::new(id, id == self.active))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five stacked sections below an 80px header
    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(SectionId::Home, 80.0, 900.0),
            SectionBounds::new(SectionId::About, 980.0, 1000.0),
            SectionBounds::new(SectionId::Skills, 1980.0, 1100.0),
            SectionBounds::new(SectionId::Projects, 3080.0, 1400.0),
            SectionBounds::new(SectionId::Contact, 4480.0, 900.0),
        ]
    }

    fn sample(offset: f64) -> ScrollSample {
        ScrollSample::new(offset, 5460.0, 900.0)
    }

    #[test]
    fn test_default_active_is_home() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.active(), SectionId::Home);
        let items = tracker.nav_items();
        assert_eq!(items.iter().filter(|i| i.active).count(), 1);
        assert!(items[0].active);
    }

    #[test]
    fn test_pretrigger_activates_early() {
        let mut tracker = ScrollTracker::default();
        // About starts at 980, so it is active from 880 onwards
        tracker.on_scroll(sample(879.0), &layout());
        assert_eq!(tracker.active(), SectionId::Home);
        let update = tracker.on_scroll(sample(880.0), &layout());
        assert_eq!(update.active, Some(SectionId::About));
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_jump_skips_intermediate_sections() {
        let mut tracker = ScrollTracker::default();
        let update = tracker.on_scroll(sample(2000.0), &layout());
        assert_eq!(update.active, Some(SectionId::Skills));
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut tracker = ScrollTracker::default();
        tracker.on_scroll(sample(4500.0), &layout());
        assert_eq!(tracker.active(), SectionId::Contact);
        // Past the end of the last section
        let update = tracker.on_scroll(sample(6000.0), &layout());
        assert_eq!(update.active, None);
        assert_eq!(tracker.active(), SectionId::Contact);
        // No layout at all (geometry unavailable)
        tracker.on_scroll(sample(10.0), &[]);
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn test_overlap_prefers_document_order() {
        let overlapping = vec![
            SectionBounds::new(SectionId::Home, 0.0, 1000.0),
            SectionBounds::new(SectionId::About, 500.0, 1000.0),
        ];
        assert_eq!(active_section(&overlapping, 600.0, 100.0), Some(SectionId::Home));
    }

    #[test]
    fn test_exactly_one_active_after_scroll() {
        let mut tracker = ScrollTracker::default();
        for offset in [0.0, 700.0, 1500.0, 3100.0, 4700.0, 9000.0] {
            tracker.on_scroll(sample(offset), &layout());
            let active = tracker.nav_items().iter().filter(|i| i.active).count();
            assert_eq!(active, 1, "offset {}", offset);
        }
    }

    #[test]
    fn test_scrolled_flag_reported_only_on_change() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.on_scroll(sample(20.0), &layout()).scrolled, None);
        assert_eq!(tracker.on_scroll(sample(51.0), &layout()).scrolled, Some(true));
        assert_eq!(tracker.on_scroll(sample(300.0), &layout()).scrolled, None);
        assert_eq!(tracker.on_scroll(sample(50.0), &layout()).scrolled, Some(false));
    }

    #[test]
    fn test_select_overrides_until_next_match() {
        let mut tracker = ScrollTracker::default();
        assert!(tracker.select(SectionId::Projects));
        assert!(!tracker.select(SectionId::Projects));
        assert_eq!(tracker.active(), SectionId::Projects);
        tracker.on_scroll(sample(100.0), &layout());
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn test_from_config_uses_overrides() {
        let mut config = SiteConfig::default();
        config.scroll_threshold = 200.0;
        config.pretrigger_offset = 0.0;
        let mut tracker = ScrollTracker::from_config(&config);
        tracker.on_scroll(sample(150.0), &layout());
        assert!(!tracker.state().past_threshold);
        tracker.on_scroll(sample(950.0), &layout());
        assert_eq!(tracker.active(), SectionId::Home);
    }
}
