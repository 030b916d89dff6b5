//! Decorative particle field
//!
//! `field` holds the point cloud and its rotation (pure, deterministic for a
//! seed). `renderer` draws it with WebGPU. The browser binding that owns both
//! lives in `platform::background`.

pub mod field;
pub mod renderer;

pub use field::ParticleField;
pub use renderer::{ParticleRenderer, RenderInitError};
