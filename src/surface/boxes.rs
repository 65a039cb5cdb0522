//! Geometry made of axis-aligned boxes

use crate::core::types::Result;
use crate::math::{Aabb, Ray};
use super::{SurfaceHit, SurfaceQuery};

/// Collection of solid boxes; a ray hits the nearest box face it enters.
#[derive(Clone, Debug, Default)]
pub struct BoxSurface {
    boxes: Vec<Aabb>,
}

impl BoxSurface {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    pub fn push(&mut self, aabb: Aabb) {
        self.boxes.push(aabb);
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl SurfaceQuery for BoxSurface {
    fn raycast(&self, ray: &Ray) -> Result<Option<SurfaceHit>> {
        let nearest = self.boxes
            .iter()
            .filter_map(|aabb| ray.intersects_aabb(aabb).map(|(t_near, _)| t_near))
            .min_by(|a, b| a.total_cmp(b));

        Ok(nearest.map(|t| SurfaceHit::along(ray, t)))
    }
}
