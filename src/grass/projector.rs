//! Resolves a sample ray to the point where it lands on the surface.

use glam::Vec3;

use crate::core::types::Result;
use crate::math::Ray;
use crate::surface::SurfaceQuery;

/// Cast one sample ray against the surface.
///
/// Returns the nearest hit point, or `None` when the ray misses. A miss has
/// no fallback position. Errors from the surface pass through untouched.
pub fn project<S: SurfaceQuery + ?Sized>(ray: &Ray, surface: &S) -> Result<Option<Vec3>> {
    Ok(surface.raycast(ray)?.map(|hit| hit.point))
}
