//! Reveal target arena
//!
//! Each target owns a `revealed` flag that only ever goes false -> true. The
//! registry is the single writer of those flags.

use crate::consts::DEFAULT_REVEAL_THRESHOLD;

/// Handle into the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(usize);

impl RevealId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Result of feeding an observation to a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Hidden before, revealed now
    Revealed,
    /// Nothing changed (still hidden, or already revealed)
    Unchanged,
}

/// A single reveal target
#[derive(Debug, Clone)]
pub struct RevealTarget {
    /// DOM key (element id or selector) the binding uses to find it again
    pub key: String,
    /// Fraction of the box that must be visible
    pub threshold: f64,
    revealed: bool,
}

impl RevealTarget {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether an observed fraction satisfies the threshold
    pub fn satisfied_by(&self, fraction: f64) -> bool {
        if fraction.is_nan() {
            return false;
        }
        fraction >= self.threshold
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealRegistry {
    targets: Vec<RevealTarget>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target. Thresholds are clamped into (0, 1]; non-finite ones use the default.
    pub fn register(&mut self, key: impl Into<String>, threshold: f64) -> RevealId {
        let threshold = if threshold.is_finite() {
            threshold.clamp(f64::EPSILON, 1.0)
        } else {
            DEFAULT_REVEAL_THRESHOLD
        };
        let id = RevealId(self.targets.len());
        self.targets.push(RevealTarget {
            key: key.into(),
            threshold,
            revealed: false,
        });
        id
    }

    /// `revealed' = revealed || fraction >= threshold`
    pub fn observe(&mut self, id: RevealId, fraction: f64) -> Transition {
        let Some(target) = self.targets.get_mut(id.0) else {
            log::warn!("Observation for unknown reveal target {}", id.0);
            return Transition::Unchanged;
        };
        if target.revealed || !target.satisfied_by(fraction) {
            return Transition::Unchanged;
        }
        target.revealed = true;
        log::debug!("Revealed '{}' at {:.2}", target.key, fraction);
        Transition::Revealed
    }

    /// Reveal every remaining target at once (reduced motion, no observer)
    pub fn reveal_all(&mut self) -> Vec<RevealId> {
        let mut revealed = Vec::new();
        for (i, target) in self.targets.iter_mut().enumerate() {
            if !target.revealed {
                target.revealed = true;
                revealed.push(RevealId(i));
            }
        }
        revealed
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.targets.get(id.0).is_some_and(|t| t.revealed)
    }

    pub fn get(&self, id: RevealId) -> Option<&RevealTarget> {
        self.targets.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn all_revealed(&self) -> bool {
        self.targets.iter().all(|t| t.revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_shot() {
        let mut reg = RevealRegistry::new();
        let about = reg.register("about", 0.2);

        assert_eq!(reg.observe(about, 0.1), Transition::Unchanged);
        assert!(!reg.is_revealed(about));
        assert_eq!(reg.observe(about, 0.2), Transition::Revealed);
        assert!(reg.is_revealed(about));

        // Scrolled fully out of view again
        assert_eq!(reg.observe(about, 0.0), Transition::Unchanged);
        assert!(reg.is_revealed(about));
        assert_eq!(reg.observe(about, 1.0), Transition::Unchanged);
    }

    #[test]
    fn test_targets_are_independent() {
        let mut reg = RevealRegistry::new();
        let skills = reg.register("skills", 0.1);
        let projects = reg.register("projects", 0.1);

        reg.observe(projects, 0.5);
        assert!(reg.is_revealed(projects));
        assert!(!reg.is_revealed(skills));
        assert!(!reg.all_revealed());
    }

    #[test]
    fn test_threshold_clamping() {
        let mut reg = RevealRegistry::new();
        let zero = reg.register("zero", 0.0);
        let big = reg.register("big", 3.0);
        let nan = reg.register("nan", f64::NAN);

        assert_eq!(reg.observe(zero, 0.0), Transition::Unchanged);
        assert_eq!(reg.observe(zero, 0.01), Transition::Revealed);
        assert_eq!(reg.get(big).map(|t| t.threshold), Some(1.0));
        assert_eq!(reg.get(nan).map(|t| t.threshold), Some(DEFAULT_REVEAL_THRESHOLD));
        assert_eq!(reg.observe(big, f64::NAN), Transition::Unchanged);
    }

    #[test]
    fn test_reveal_all() {
        let mut reg = RevealRegistry::new();
        let a = reg.register("a", 0.1);
        let b = reg.register("b", 0.1);
        reg.observe(a, 1.0);

        assert_eq!(reg.get(b).map(|t| t.key.as_str()), Some("b"));
        assert!(!reg.all_revealed());
        assert_eq!(reg.reveal_all(), vec![b]);
        assert!(reg.all_revealed());
        assert!(reg.reveal_all().is_empty());
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut reg = RevealRegistry::new();
        let mut other = RevealRegistry::new();
        let foreign = other.register("x", 0.1);
        assert_eq!(reg.observe(foreign, 1.0), Transition::Unchanged);
        assert!(!reg.is_revealed(foreign));
    }
}
