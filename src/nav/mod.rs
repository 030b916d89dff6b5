//! Scroll-driven navigation state
//!
//! Pure and host-independent: the browser binding feeds it scroll samples and
//! section geometry, and reads back what changed. Nothing in here touches the
//! DOM.

pub mod coalesce;
pub mod menu;
pub mod scroll;
pub mod section;
pub mod tracker;

pub use coalesce::ScrollCoalescer;
pub use menu::{MobileMenu, NavItem, scroll_target};
pub use scroll::{Parallax, ScrollSample, ScrollState, hero_parallax, scroll_percentage};
pub use section::{SectionBounds, SectionId};
pub use tracker::{ScrollTracker, ScrollUpdate, active_section};
