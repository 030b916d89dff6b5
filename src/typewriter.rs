//! Typewriter text for the hero subtitle
//!
//! Cycles through a list of phrases: type one character at a time, hold the
//! full phrase, erase it, move on to the next. Driven purely by elapsed time
//! so the frame loop can feed it whatever delta it measured.

/// Delay between typed characters (ms)
pub const TYPE_STEP_MS: f64 = 60.0;
/// Delay between erased characters (ms)
pub const ERASE_STEP_MS: f64 = 30.0;
/// Longest delta accepted per call; longer gaps (hidden tab) are cut short
pub const MAX_STEP_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Erasing,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    hold_ms: f64,
    current: usize,
    visible: usize,
    phase: Phase,
    clock: f64,
}

impl Typewriter {
    /// Blank phrases are skipped
    pub fn new<S: AsRef<str>>(phrases: &[S], hold_ms: u32) -> Self {
        Self {
            phrases: phrases
                .iter()
                .map(|p| p.as_ref().chars().collect::<Vec<_>>())
                .filter(|p| !p.iter().all(|c| c.is_whitespace()))
                .collect(),
            hold_ms: hold_ms as f64,
            current: 0,
            visible: 0,
            phase: Phase::Typing,
            clock: 0.0,
        }
    }

    /// Currently displayed text
    pub fn text(&self) -> String {
        self.phrases
            .get(self.current)
            .map(|p| p[..self.visible].iter().collect())
            .unwrap_or_default()
    }

    /// Index of the phrase being typed or erased
    pub fn phrase_index(&self) -> usize {
        self.current
    }

    /// Advance by `dt_ms`. Returns true if the displayed text changed.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if self.phrases.is_empty() || !dt_ms.is_finite() {
            return false;
        }
        let before = (self.current, self.visible);
        self.clock += dt_ms.clamp(0.0, MAX_STEP_MS);

        loop {
            let len = self.phrases[self.current].len();
            match self.phase {
                Phase::Typing if self.visible >= len => self.phase = Phase::Holding,
                Phase::Typing if self.clock >= TYPE_STEP_MS => {
                    self.clock -= TYPE_STEP_MS;
                    self.visible += 1;
                }
                Phase::Holding if self.clock >= self.hold_ms => {
                    self.clock -= self.hold_ms;
                    self.phase = Phase::Erasing;
                }
                Phase::Erasing if self.visible == 0 => {
                    self.current = (self.current + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
                Phase::Erasing if self.clock >= ERASE_STEP_MS => {
                    self.clock -= ERASE_STEP_MS;
                    self.visible -= 1;
                }
                _ => break,
            }
        }

        before != (self.current, self.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_then_holds() {
        let mut tw = Typewriter::new(&["Web", "Rust"], 2000);
        assert_eq!(tw.text(), "");
        assert!(tw.advance(TYPE_STEP_MS));
        assert_eq!(tw.text(), "W");
        tw.advance(TYPE_STEP_MS * 2.0);
        assert_eq!(tw.text(), "Web");
        // Holding: nothing changes until the hold elapses
        assert!(!tw.advance(1999.0));
        assert_eq!(tw.text(), "Web");
    }

    #[test]
    fn test_erases_and_moves_on() {
        let mut tw = Typewriter::new(&["ab", "xyz"], 100);
        tw.advance(TYPE_STEP_MS * 2.0);
        tw.advance(100.0);
        tw.advance(ERASE_STEP_MS);
        assert_eq!(tw.text(), "a");
        tw.advance(ERASE_STEP_MS);
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.text(), "");
        tw.advance(TYPE_STEP_MS);
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_wraps_around() {
        let mut tw = Typewriter::new(&["a", "b"], 0);
        let mut seen = Vec::new();
        for _ in 0..40 {
            tw.advance(30.0);
            seen.push(tw.phrase_index());
        }
        assert!(seen.contains(&0) && seen.contains(&1));
    }

    #[test]
    fn test_blank_phrases() {
        let mut tw = Typewriter::new(&["", "  "], 100);
        assert!(!tw.advance(500.0));
        assert_eq!(tw.text(), "");

        let mut tw = Typewriter::new(&["", "ok"], 100);
        tw.advance(TYPE_STEP_MS);
        assert_eq!(tw.text(), "o");
    }

    #[test]
    fn test_long_gap_is_capped() {
        let mut tw = Typewriter::new(&["abcdefghijklmnopqrstuvwxyz"], 5000);
        tw.advance(60_000.0);
        // 1000ms cap at 60ms per char
        assert_eq!(tw.text().len(), 16);
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new(&["héllo ✉"], 100);
        tw.advance(TYPE_STEP_MS * 7.0);
        assert_eq!(tw.text(), "héllo ✉");
    }
}
