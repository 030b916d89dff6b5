//! One-shot reveal animations
//!
//! - `registry`: arena of reveal targets with a monotonic hidden -> revealed flag
//! - `geometry`: visible fraction of a box inside the viewport
//! - `motion`: initial/final presentations and staggered child timing

pub mod geometry;
pub mod motion;
pub mod registry;

pub use geometry::{Rect, visible_fraction};
pub use motion::{Direction, Length, Presentation, Stagger, Timing, Variant};
pub use registry::{RevealId, RevealRegistry, RevealTarget, Transition};
