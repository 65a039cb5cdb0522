//! Infinite horizontal plane, optionally with rectangular holes

use crate::core::types::Result;
use crate::math::{Ray, Rect};
use super::{SurfaceHit, SurfaceQuery};

/// Horizontal plane at `height`. Rays passing through a hole miss.
#[derive(Clone, Debug, Default)]
pub struct PlaneSurface {
    pub height: f32,
    pub holes: Vec<Rect>,
}

impl PlaneSurface {
    pub fn new(height: f32) -> Self {
        Self { height, holes: Vec::new() }
    }

    /// Cut a rectangular hole into the plane
    pub fn with_hole(mut self, hole: Rect) -> Self {
        self.holes.push(hole);
        self
    }
}

impl SurfaceQuery for PlaneSurface {
    fn raycast(&self, ray: &Ray) -> Result<Option<SurfaceHit>> {
        let Some(t) = ray.intersects_plane_y(self.height) else {
            return Ok(None);
        };
        let hit = SurfaceHit::along(ray, t);
        if self.holes.iter().any(|hole| hole.contains_xz(hit.point)) {
            return Ok(None);
        }
        Ok(Some(hit))
    }
}
