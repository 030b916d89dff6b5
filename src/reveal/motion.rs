//! Reveal presentations
//!
//! A variant describes where an element starts (hidden) and where it ends up
//! (visible). The DOM binding writes the hidden style at mount and switches to
//! the visible style when the owning target reveals; CSS transitions do the
//! interpolation.

/// Spring-like easing (damping 15, stiffness 100) as a CSS curve
pub const SPRING_EASING: &str = "cubic-bezier(0.34, 1.3, 0.64, 1)";
/// Default transition length (seconds)
pub const DEFAULT_DURATION: f64 = 0.5;

/// Where an element travels in from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A CSS length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);

    pub fn css(&self) -> String {
        match self {
            Length::Px(v) => format!("{}px", v),
            Length::Percent(v) => format!("{}%", v),
        }
    }
}

/// Visual state of an element at one end of its transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub opacity: f64,
    pub translate_x: Length,
    pub translate_y: Length,
    pub scale: f64,
}

impl Presentation {
    /// Fully shown, untransformed
    pub const SHOWN: Presentation = Presentation {
        opacity: 1.0,
        translate_x: Length::ZERO,
        translate_y: Length::ZERO,
        scale: 1.0,
    };

    /// Value for the `transform` property
    pub fn transform(&self) -> String {
        format!(
            "translate({}, {}) scale({})",
            self.translate_x.css(),
            self.translate_y.css(),
            self.scale
        )
    }

    /// Inline style declarations for this presentation
    pub fn css(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform())
    }
}

/// Transition timing (seconds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub delay: f64,
    pub duration: f64,
}

impl Timing {
    /// Value for the `transition` property
    pub fn transition(&self) -> String {
        format!(
            "opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s",
            d = self.duration,
            e = SPRING_EASING,
            delay = self.delay
        )
    }

    pub fn css(&self) -> String {
        format!("transition: {};", self.transition())
    }
}

/// Entrance animations used across the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variant {
    /// Fade while travelling 40px
    FadeIn { direction: Direction, delay: f64 },
    /// Grow from nothing
    ScaleIn { delay: f64 },
    /// Slide a full width in from the side
    SlideIn { direction: Direction, delay: f64 },
    /// Rise 50px
    Text { delay: f64 },
    /// Plain opacity fade over `duration`
    Fade { duration: f64 },
}

impl Variant {
    pub fn fade_in(direction: Direction, delay: f64) -> Self {
        Variant::FadeIn { direction, delay }
    }

    pub fn scale_in(delay: f64) -> Self {
        Variant::ScaleIn { delay }
    }

    pub fn slide_in(direction: Direction, delay: f64) -> Self {
        Variant::SlideIn { direction, delay }
    }

    pub fn text(delay: f64) -> Self {
        Variant::Text { delay }
    }

    pub fn hidden(&self) -> Presentation {
        match *self {
            Variant::FadeIn { direction, .. } => {
                let (x, y) = match direction {
                    Direction::Up => (0.0, 40.0),
                    Direction::Down => (0.0, -40.0),
                    Direction::Left => (40.0, 0.0),
                    Direction::Right => (-40.0, 0.0),
                };
                Presentation {
                    opacity: 0.0,
                    translate_x: Length::Px(x),
                    translate_y: Length::Px(y),
                    scale: 1.0,
                }
            }
            Variant::ScaleIn { .. } => Presentation {
                opacity: 0.0,
                scale: 0.0,
                ..Presentation::SHOWN
            },
            Variant::SlideIn { direction, .. } => {
                let x = match direction {
                    Direction::Left => -100.0,
                    _ => 100.0,
                };
                Presentation {
                    opacity: 0.0,
                    translate_x: Length::Percent(x),
                    ..Presentation::SHOWN
                }
            }
            Variant::Text { .. } => Presentation {
                opacity: 0.0,
                translate_y: Length::Px(50.0),
                ..Presentation::SHOWN
            },
            Variant::Fade { .. } => Presentation {
                opacity: 0.0,
                ..Presentation::SHOWN
            },
        }
    }

    pub fn visible(&self) -> Presentation {
        Presentation::SHOWN
    }

    /// The variant's own timing, before any stagger is applied
    pub fn timing(&self) -> Timing {
        match *self {
            Variant::FadeIn { delay, .. }
            | Variant::ScaleIn { delay }
            | Variant::SlideIn { delay, .. }
            | Variant::Text { delay } => Timing {
                delay,
                duration: DEFAULT_DURATION,
            },
            Variant::Fade { duration } => Timing {
                delay: 0.0,
                duration,
            },
        }
    }
}

/// Staggered children of a revealing container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// Gap between consecutive children (seconds)
    pub stagger_children: f64,
    /// Delay before the first child (seconds)
    pub delay_children: f64,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            stagger_children: 0.1,
            delay_children: 0.3,
        }
    }
}

impl Stagger {
    pub fn new(stagger_children: f64, delay_children: f64) -> Self {
        Self {
            stagger_children,
            delay_children,
        }
    }

    /// Delay for the child at `index` in declaration order
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + index as f64 * self.stagger_children
    }

    /// Delays for `count` children, non-decreasing in declaration order
    pub fn delays(&self, count: usize) -> Vec<f64> {
        (0..count).map(|i| self.delay_for(i)).collect()
    }

    /// Full timing for a child: stagger slot plus the child's own delay
    pub fn child_timing(&self, index: usize, variant: &Variant) -> Timing {
        let own = variant.timing();
        Timing {
            delay: self.delay_for(index) + own.delay,
            duration: own.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_offsets() {
        let up = Variant::fade_in(Direction::Up, 0.3).hidden();
        assert_eq!(up.translate_y, Length::Px(40.0));
        assert_eq!(up.opacity, 0.0);
        let right = Variant::fade_in(Direction::Right, 0.0).hidden();
        assert_eq!(right.translate_x, Length::Px(-40.0));
    }

    #[test]
    fn test_every_variant_ends_shown() {
        let variants = [
            Variant::fade_in(Direction::Down, 0.1),
            Variant::scale_in(0.5),
            Variant::slide_in(Direction::Left, 0.0),
            Variant::text(0.2),
            Variant::Fade { duration: 0.6 },
        ];
        for v in variants {
            assert_eq!(v.visible(), Presentation::SHOWN);
            assert_eq!(v.hidden().opacity, 0.0);
        }
    }

    #[test]
    fn test_css_rendering() {
        let css = Variant::slide_in(Direction::Left, 0.0).hidden().css();
        assert_eq!(css, "opacity: 0; transform: translate(-100%, 0px) scale(1);");
        let timing = Timing { delay: 0.4, duration: 0.5 }.css();
        assert!(timing.contains("opacity 0.5s"));
        assert!(timing.ends_with("0.4s;"));
    }

    #[test]
    fn test_stagger_preserves_declared_order() {
        let stagger = Stagger::default();
        let delays = stagger.delays(4);
        assert_eq!(delays.len(), 4);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert!((delays[0] - 0.3).abs() < 1e-12);
        assert!((delays[3] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_child_timing_adds_own_delay() {
        let stagger = Stagger::new(0.1, 0.0);
        let t = stagger.child_timing(2, &Variant::fade_in(Direction::Up, 0.3));
        assert!((t.delay - 0.5).abs() < 1e-12);
        assert_eq!(t.duration, DEFAULT_DURATION);
    }
}
