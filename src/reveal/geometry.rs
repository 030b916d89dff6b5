//! Viewport intersection math

/// Axis-aligned box in viewport coordinates (px)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn is_valid(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Overlap of `[a0, a1)` and `[b0, b1)`
#[inline]
fn overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

/// Fraction (0..=1) of `target` that lies inside `viewport`.
///
/// A zero-area target counts as fully visible when it touches the viewport,
/// the same way an intersection observer reports it.
pub fn visible_fraction(target: &Rect, viewport: &Rect) -> f64 {
    if !target.is_valid() || !viewport.is_valid() {
        return 0.0;
    }

    let area = target.width * target.height;
    if area == 0.0 {
        let touches = target.left <= viewport.right()
            && target.right() >= viewport.left
            && target.top <= viewport.bottom()
            && target.bottom() >= viewport.top;
        return if touches { 1.0 } else { 0.0 };
    }

    let w = overlap(target.left, target.right(), viewport.left, viewport.right());
    let h = overlap(target.top, target.bottom(), viewport.top, viewport.bottom());
    ((w * h) / area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

    #[test]
    fn test_fully_inside() {
        let r = Rect::new(100.0, 100.0, 400.0, 300.0);
        assert_eq!(visible_fraction(&r, &VIEWPORT), 1.0);
    }

    #[test]
    fn test_entering_from_below() {
        // 1000px tall section whose top is 100px above the viewport bottom
        let r = Rect::new(0.0, 700.0, 1280.0, 1000.0);
        assert!((visible_fraction(&r, &VIEWPORT) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_scrolled_past() {
        let r = Rect::new(0.0, -1200.0, 1280.0, 1000.0);
        assert_eq!(visible_fraction(&r, &VIEWPORT), 0.0);
    }

    #[test]
    fn test_degenerate_rects() {
        let line = Rect::new(10.0, 400.0, 0.0, 0.0);
        assert_eq!(visible_fraction(&line, &VIEWPORT), 1.0);
        let offscreen = Rect::new(10.0, 4000.0, 0.0, 0.0);
        assert_eq!(visible_fraction(&offscreen, &VIEWPORT), 0.0);
        let bad = Rect::new(f64::NAN, 0.0, 10.0, 10.0);
        assert_eq!(visible_fraction(&bad, &VIEWPORT), 0.0);
    }
}
