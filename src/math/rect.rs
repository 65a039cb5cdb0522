//! Horizontal (XZ) rectangle used for grass footprints

use crate::core::types::{Vec2, Vec3};

/// Rectangle on the XZ plane, centered on `center` with full extents `size`.
///
/// `center.x`/`size.x` run along world X and `center.y`/`size.y` along world Z.
/// Negative sizes are allowed and describe the same area as their absolute value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Rectangle centered on the horizontal coordinates of `anchor`
    pub fn around(anchor: Vec3, size: Vec2) -> Self {
        Self::new(Vec2::new(anchor.x, anchor.z), size)
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.size.abs() * 0.5
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.size.abs() * 0.5
    }

    /// Check if world-space (x, z) lies inside, edges included
    pub fn contains(&self, x: f32, z: f32) -> bool {
        let (min, max) = (self.min(), self.max());
        x >= min.x && x <= max.x && z >= min.y && z <= max.y
    }

    /// Check if the horizontal projection of `p` lies inside
    pub fn contains_xz(&self, p: Vec3) -> bool {
        self.contains(p.x, p.z)
    }
}
