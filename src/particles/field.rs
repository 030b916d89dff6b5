//! Point cloud state

use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// A fixed-size cloud of points spinning as one body.
///
/// The count never changes after construction; only the whole-field rotation
/// advances each frame.
#[derive(Debug, Clone)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    /// Accumulated rotation about X and Y (radians)
    rotation: Vec2,
    /// Pointer offset from the viewport centre, each axis in [-0.5, 0.5]
    pointer: Vec2,
}

impl ParticleField {
    /// Scatter `count` points uniformly in a cube of edge `PARTICLE_SPREAD`
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let half = PARTICLE_SPREAD / 2.0;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.random_range(-half..half),
                    rng.random_range(-half..half),
                    rng.random_range(-half..half),
                )
            })
            .collect();

        Self {
            positions,
            rotation: Vec2::ZERO,
            pointer: Vec2::ZERO,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Track the pointer from client coordinates inside a `width` x `height` viewport
    pub fn set_pointer(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let x = (client_x / width - 0.5).clamp(-0.5, 0.5);
        let y = (client_y / height - 0.5).clamp(-0.5, 0.5);
        if x.is_finite() && y.is_finite() {
            self.pointer = Vec2::new(x, y);
        }
    }

    /// One frame: constant spin plus a pointer-proportional nudge.
    ///
    /// Horizontal pointer offset turns the field about Y, vertical about X.
    pub fn advance(&mut self) {
        self.rotation.x += PARTICLE_BASE_SPIN + self.pointer.y * PARTICLE_POINTER_GAIN;
        self.rotation.y += PARTICLE_BASE_SPIN + self.pointer.x * PARTICLE_POINTER_GAIN;
    }

    /// Object-to-world transform for the current rotation
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    /// Camera at z = `CAMERA_DISTANCE` looking at the origin
    pub fn view_projection(aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        let projection = Mat4::perspective_rh(
            CAMERA_FOV_DEG.to_radians(),
            aspect,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE));
        projection * view
    }

    /// Combined transform uploaded to the GPU each frame
    pub fn mvp(&self, aspect: f32) -> Mat4 {
        Self::view_projection(aspect) * self.model_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_stay_inside_cube() {
        let field = ParticleField::new(PARTICLE_COUNT, 7);
        assert_eq!(field.len(), PARTICLE_COUNT);
        let half = PARTICLE_SPREAD / 2.0;
        assert!(field.positions().iter().all(|p| p.abs().max_element() <= half));
    }

    #[test]
    fn test_same_seed_same_cloud() {
        let a = ParticleField::new(64, 42);
        let b = ParticleField::new(64, 42);
        let c = ParticleField::new(64, 43);
        assert_eq!(a.positions(), b.positions());
        assert_ne!(a.positions(), c.positions());
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(ParticleField::new(0, 42).is_empty());
        assert!(!ParticleField::new(1, 42).is_empty());
    }

    #[test]
    fn test_idle_spin() {
        let mut field = ParticleField::new(8, 1);
        for _ in 0..1000 {
            field.advance();
        }
        let rot = field.rotation();
        assert!((rot.x - 1.0).abs() < 1e-3);
        assert!((rot.y - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_pointer_nudges_rotation() {
        let mut field = ParticleField::new(8, 1);
        // Pointer at the right edge, vertically centred
        field.set_pointer(1920.0, 540.0, 1920.0, 1080.0);
        assert_eq!(field.pointer(), Vec2::new(0.5, 0.0));
        field.advance();
        let rot = field.rotation();
        assert!((rot.y - (PARTICLE_BASE_SPIN + 0.5 * PARTICLE_POINTER_GAIN)).abs() < 1e-7);
        assert!((rot.x - PARTICLE_BASE_SPIN).abs() < 1e-7);
    }

    #[test]
    fn test_pointer_ignores_empty_viewport() {
        let mut field = ParticleField::new(8, 1);
        field.set_pointer(10.0, 10.0, 0.0, 0.0);
        assert_eq!(field.pointer(), Vec2::ZERO);
    }

    #[test]
    fn test_origin_projects_to_centre() {
        let field = ParticleField::new(1, 1);
        let clip = field.mvp(16.0 / 9.0) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
