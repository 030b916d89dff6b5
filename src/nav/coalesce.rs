//! Scroll signal coalescing
//!
//! Browsers can fire scroll events many times per frame. Layout reads are
//! only worth doing once per frame, so signals are folded into a single
//! pending update that the next animation frame drains.

#[derive(Debug, Default, Clone)]
pub struct ScrollCoalescer {
    pending: bool,
    signals: u32,
}

impl ScrollCoalescer {
    /// Record a scroll signal. Returns true when a frame must be scheduled.
    pub fn request(&mut self) -> bool {
        self.signals = self.signals.saturating_add(1);
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Drain the pending update. Returns how many signals it covers (0 if none).
    pub fn take(&mut self) -> u32 {
        if !self.pending {
            return 0;
        }
        self.pending = false;
        std::mem::take(&mut self.signals)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_schedules_one_frame() {
        let mut c = ScrollCoalescer::default();
        assert!(c.request());
        assert!(!c.request());
        assert!(!c.request());
        assert!(c.is_pending());
        assert_eq!(c.take(), 3);
        assert!(!c.is_pending());
        assert_eq!(c.take(), 0);
    }

    #[test]
    fn test_next_burst_schedules_again() {
        let mut c = ScrollCoalescer::default();
        c.request();
        c.take();
        assert!(c.request());
        assert_eq!(c.take(), 1);
    }
}
