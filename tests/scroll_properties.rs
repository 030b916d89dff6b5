//! Property tests for the scroll tracker

use glassfolio::nav::{ScrollSample, ScrollTracker, SectionBounds, SectionId, active_section, scroll_percentage};
use proptest::prelude::*;

fn any_reading() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1e6_f64..1e6,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

/// Stacked sections in document order, no gaps
fn any_layout() -> impl Strategy<Value = Vec<SectionBounds>> {
    (0.0_f64..200.0, prop::collection::vec(100.0_f64..2000.0, 5)).prop_map(|(start, heights)| {
        let mut top = start;
        SectionId::ALL
            .iter()
            .zip(heights)
            .map(|(&id, height)| {
                let bounds = SectionBounds::new(id, top, height);
                top += height;
                bounds
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn percentage_stays_in_range(offset in any_reading(), scrollable in any_reading()) {
        let pct = scroll_percentage(offset, scrollable);
        prop_assert!((0.0..=100.0).contains(&pct), "{pct} for offset {offset}, scrollable {scrollable}");
    }

    #[test]
    fn nothing_to_scroll_is_zero_percent(offset in any_reading(), scrollable in -1e6_f64..=0.0) {
        prop_assert_eq!(scroll_percentage(offset, scrollable), 0.0);
    }

    #[test]
    fn scrolled_flag_is_strictly_past_threshold(offset in 0.0_f64..200.0, threshold in 0.0_f64..200.0) {
        let mut tracker = ScrollTracker::new(threshold, 100.0);
        tracker.on_scroll(ScrollSample::new(offset, 5000.0, 800.0), &[]);
        prop_assert_eq!(tracker.state().past_threshold, offset > threshold);
    }

    #[test]
    fn exactly_one_nav_item_is_active(
        layout in any_layout(),
        offsets in prop::collection::vec(-500.0_f64..12000.0, 1..20),
    ) {
        let mut tracker = ScrollTracker::default();
        for offset in offsets {
            tracker.on_scroll(ScrollSample::new(offset, 12000.0, 800.0), &layout);
            let active: Vec<_> = tracker.nav_items().into_iter().filter(|i| i.active).collect();
            prop_assert_eq!(active.len(), 1);
            prop_assert_eq!(active[0].target, tracker.active());
        }
    }

    #[test]
    fn first_matching_section_wins(
        layout in any_layout(),
        offset in 0.0_f64..12000.0,
        pretrigger in 0.0_f64..300.0,
    ) {
        if let Some(id) = active_section(&layout, offset, pretrigger) {
            let first = layout.iter().find(|s| s.contains(offset, pretrigger)).map(|s| s.id);
            prop_assert_eq!(Some(id), first);
            // Nothing earlier in document order also matched
            for s in layout.iter().take_while(|s| s.id != id) {
                prop_assert!(!s.contains(offset, pretrigger));
            }
        }
    }

    #[test]
    fn unmatched_offset_keeps_active_section(layout in any_layout(), jump in 0usize..5) {
        let mut tracker = ScrollTracker::default();
        let target = &layout[jump];
        tracker.on_scroll(ScrollSample::new(target.top - 100.0 + 1.0, 12000.0, 800.0), &layout);
        let before = tracker.active();

        // Far below every section
        let update = tracker.on_scroll(ScrollSample::new(1e7, 12000.0, 800.0), &layout);
        prop_assert_eq!(update.active, None);
        prop_assert_eq!(tracker.active(), before);
    }
}
