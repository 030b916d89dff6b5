//! Property tests for reveal triggering

use glassfolio::reveal::{Rect, RevealRegistry, Stagger, Transition, visible_fraction};
use proptest::prelude::*;

fn any_fraction() -> impl Strategy<Value = f64> {
    prop_oneof![
        10 => 0.0_f64..=1.0,
        1 => Just(f64::NAN),
    ]
}

proptest! {
    #[test]
    fn revealed_is_monotonic(
        threshold in 0.01_f64..=1.0,
        fractions in prop::collection::vec(any_fraction(), 1..40),
    ) {
        let mut registry = RevealRegistry::new();
        let id = registry.register("section", threshold);

        let mut seen = false;
        let mut transitions = 0;
        for fraction in fractions {
            if registry.observe(id, fraction) == Transition::Revealed {
                transitions += 1;
            }
            let now = registry.is_revealed(id);
            prop_assert!(!seen || now, "revealed flag went back to false");
            prop_assert_eq!(now, seen || fraction >= threshold);
            seen = now;
        }
        prop_assert!(transitions <= 1);
    }

    #[test]
    fn targets_are_independent(
        a in 0.01_f64..=1.0,
        b in 0.01_f64..=1.0,
        fraction in 0.0_f64..=1.0,
    ) {
        let mut registry = RevealRegistry::new();
        let first = registry.register("a", a);
        let second = registry.register("b", b);

        registry.observe(first, fraction);
        prop_assert!(!registry.is_revealed(second));
        prop_assert_eq!(registry.is_revealed(first), fraction >= a);
    }

    #[test]
    fn visible_fraction_is_a_fraction(
        x in -3000.0_f64..3000.0,
        y in -3000.0_f64..3000.0,
        w in 0.0_f64..2000.0,
        h in 0.0_f64..2000.0,
    ) {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let f = visible_fraction(&Rect::new(x, y, w, h), &viewport);
        prop_assert!((0.0..=1.0).contains(&f));
    }

    #[test]
    fn stagger_preserves_declared_order(
        step in 0.0_f64..1.0,
        lead in 0.0_f64..2.0,
        count in 0usize..30,
    ) {
        let delays = Stagger::new(step, lead).delays(count);
        prop_assert_eq!(delays.len(), count);
        for pair in delays.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }
}
