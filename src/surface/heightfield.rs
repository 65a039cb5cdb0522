//! Noise heightfield surface.
//!
//! Vertical rays resolve analytically against `height_at`. Other rays are
//! marched in fixed steps until they pass below the terrain, then the
//! crossing is refined by bisection.

use crate::core::types::Result;
use crate::math::Ray;
use crate::terrain::{TerrainGenerator, TerrainParams};
use super::{SurfaceHit, SurfaceQuery};

/// Default march step in meters
const DEFAULT_STEP: f32 = 0.25;
/// Default maximum march distance in meters
const DEFAULT_MAX_DISTANCE: f32 = 4096.0;
/// Bisection iterations after the crossing is bracketed
const REFINE_ITERATIONS: u32 = 16;

/// Terrain surface backed by a `TerrainGenerator`
pub struct HeightfieldSurface {
    terrain: TerrainGenerator,
    step: f32,
    max_distance: f32,
}

impl HeightfieldSurface {
    pub fn new(terrain: TerrainGenerator) -> Self {
        Self {
            terrain,
            step: DEFAULT_STEP,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    pub fn from_params(params: TerrainParams) -> Self {
        Self::new(TerrainGenerator::new(params))
    }

    /// Override the march step and distance used for non-vertical rays
    pub fn with_march(mut self, step: f32, max_distance: f32) -> Self {
        self.step = step.max(1e-3);
        self.max_distance = max_distance;
        self
    }

    pub fn terrain(&self) -> &TerrainGenerator {
        &self.terrain
    }

    /// Signed height of a point above the terrain
    fn clearance(&self, ray: &Ray, t: f32) -> f32 {
        let p = ray.at(t);
        p.y - self.terrain.height_at(p.x, p.z)
    }

    fn march(&self, ray: &Ray) -> Option<SurfaceHit> {
        if self.clearance(ray, 0.0) < 0.0 {
            return None;
        }

        let mut prev_t = 0.0;
        let mut t = self.step;
        while t <= self.max_distance {
            if self.clearance(ray, t) <= 0.0 {
                let (mut lo, mut hi) = (prev_t, t);
                for _ in 0..REFINE_ITERATIONS {
                    let mid = (lo + hi) * 0.5;
                    if self.clearance(ray, mid) > 0.0 {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                return Some(SurfaceHit::along(ray, hi));
            }
            prev_t = t;
            t += self.step;
        }
        None
    }
}

impl SurfaceQuery for HeightfieldSurface {
    fn raycast(&self, ray: &Ray) -> Result<Option<SurfaceHit>> {
        let d = ray.direction;
        if d.x == 0.0 && d.z == 0.0 {
            if d.y >= 0.0 {
                return Ok(None);
            }
            let h = self.terrain.height_at(ray.origin.x, ray.origin.z);
            if ray.origin.y < h {
                return Ok(None);
            }
            let distance = (ray.origin.y - h) / -d.y;
            let mut hit = SurfaceHit::along(ray, distance);
            // Snap to the exact sampled height
            hit.point.y = h;
            return Ok(Some(hit));
        }
        Ok(self.march(ray))
    }
}
