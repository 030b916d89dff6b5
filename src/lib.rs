//! Glassfolio - a single-page portfolio site
//!
//! Core modules:
//! - `nav`: Scroll tracking (progress, scrolled flag, active section)
//! - `reveal`: One-shot, visibility-triggered section reveals
//! - `particles`: Decorative WebGPU particle field
//! - `contact`: Contact form state and the email relay
//! - `content`: Static site content
//! - `config`: Site configuration
//! - `typewriter`: Rotating hero subtitle
//! - `page`: DOM construction (wasm only)
//! - `platform`: Browser bindings (wasm only)

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use config::{QualityPreset, SiteConfig};
pub use content::SiteContent;
pub use error::MountError;

/// Site-wide constants
pub mod consts {
    /// Scroll offset (px) past which the header switches to its compact style
    pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;
    /// Sections become active this many pixels before reaching the top
    pub const SECTION_PRETRIGGER_OFFSET: f64 = 100.0;
    /// Nav links scroll to the section top shifted by the fixed header height
    pub const NAV_LINK_OFFSET: f64 = -80.0;

    /// Default fraction of a target that must be visible to reveal it
    pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

    /// Application base path
    pub const BASE_PATH: &str = "/portfolio";

    /// Particle field defaults
    pub const PARTICLE_COUNT: usize = 5000;
    /// Edge length of the cube the particles are spawned in
    pub const PARTICLE_SPREAD: f32 = 5.0;
    /// Constant per-frame rotation (radians)
    pub const PARTICLE_BASE_SPIN: f32 = 0.001;
    /// Extra per-frame rotation per unit of normalized pointer offset
    pub const PARTICLE_POINTER_GAIN: f32 = 0.01;
    /// Vertical field of view of the particle camera (degrees)
    pub const CAMERA_FOV_DEG: f32 = 75.0;
    /// Near clip plane
    pub const CAMERA_NEAR: f32 = 0.1;
    /// Far clip plane
    pub const CAMERA_FAR: f32 = 1000.0;
    /// Camera distance from the field origin along +Z
    pub const CAMERA_DISTANCE: f32 = 2.0;
}

/// Linearly map `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`, clamped
#[inline]
pub fn map_range_clamped(value: f64, (in_lo, in_hi): (f64, f64), (out_lo, out_hi): (f64, f64)) -> f64 {
    if !value.is_finite() || in_hi == in_lo {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}
