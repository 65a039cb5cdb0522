//! Surface queries that grass sample rays are cast against.
//!
//! The point cloud builder only needs nearest-hit raycasts. Terrain,
//! collision meshes, or physics scenes plug in by implementing
//! `SurfaceQuery`; the implementations in this module cover flat ground,
//! box geometry, and noise heightfields.

pub mod plane;
pub mod boxes;
pub mod heightfield;

pub use plane::PlaneSurface;
pub use boxes::BoxSurface;
pub use heightfield::HeightfieldSurface;

use crate::core::error::Error;
use crate::core::types::{Result, Vec3};
use crate::math::Ray;

/// Nearest intersection of a ray with a surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    /// World-space intersection point
    pub point: Vec3,
    /// Distance from the ray origin along its direction
    pub distance: f32,
}

impl SurfaceHit {
    pub fn along(ray: &Ray, distance: f32) -> Self {
        Self {
            point: ray.at(distance),
            distance,
        }
    }
}

/// Nearest-hit raycast against some world geometry.
///
/// `Ok(None)` is a miss. `Err` means the geometry could not be queried at
/// all and aborts the generation pass that issued the ray.
///
/// Implementations must not mutate shared state from `raycast`; parallel
/// point cloud builds call it from several threads when the type is `Sync`.
pub trait SurfaceQuery {
    fn raycast(&self, ray: &Ray) -> Result<Option<SurfaceHit>>;
}

impl<T: SurfaceQuery + ?Sized> SurfaceQuery for &T {
    fn raycast(&self, ray: &Ray) -> Result<Option<SurfaceHit>> {
        (**self).raycast(ray)
    }
}

impl<T: SurfaceQuery + ?Sized> SurfaceQuery for Box<T> {
    fn raycast(&self, ray: &Ray) -> Result<Option<SurfaceHit>> {
        (**self).raycast(ray)
    }
}

/// Surface with no geometry loaded; every query fails.
#[derive(Clone, Debug)]
pub struct UnavailableSurface {
    reason: String,
}

impl UnavailableSurface {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl SurfaceQuery for UnavailableSurface {
    fn raycast(&self, _ray: &Ray) -> Result<Option<SurfaceHit>> {
        Err(Error::GeometryUnavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_along_ray() {
        let ray = Ray::down(Vec3::new(1.0, 10.0, -1.0));
        let hit = SurfaceHit::along(&ray, 4.0);
        assert_eq!(hit.point, Vec3::new(1.0, 6.0, -1.0));
        assert_eq!(hit.distance, 4.0);
    }

    #[test]
    fn test_unavailable_surface_errors() {
        let surface = UnavailableSurface::new("terrain not streamed in");
        let result = surface.raycast(&Ray::down(Vec3::Y));
        assert!(matches!(result, Err(Error::GeometryUnavailable(msg)) if msg == "terrain not streamed in"));
    }

    #[test]
    fn test_reference_and_box_forwarding() {
        let plane = PlaneSurface::new(0.0);
        let by_ref: &dyn SurfaceQuery = &plane;
        let boxed: Box<dyn SurfaceQuery> = Box::new(PlaneSurface::new(0.0));
        let ray = Ray::down(Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(by_ref.raycast(&ray).unwrap(), boxed.raycast(&ray).unwrap());
    }
}
