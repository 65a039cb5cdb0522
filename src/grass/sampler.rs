//! Random footprint sampling.
//!
//! Each sample is a straight-down ray starting at `cast_height`, jittered
//! uniformly inside the footprint rectangle centered on the anchor. Samples
//! are i.i.d.; there is no stratification, so clusters and gaps are normal.

use glam::Vec3;
use rand::Rng;

use crate::math::Ray;
use super::config::GenerationParameters;

/// Draw one sample ray.
pub fn sample_ray<R: Rng + ?Sized>(params: &GenerationParameters, anchor: Vec3, rng: &mut R) -> Ray {
    let jitter_x = params.footprint_size.x * rng.random_range(-0.5..0.5_f32);
    let jitter_z = params.footprint_size.y * rng.random_range(-0.5..0.5_f32);
    Ray::down(Vec3::new(
        anchor.x + jitter_x,
        params.cast_height,
        anchor.z + jitter_z,
    ))
}

/// Draw the sample rays for one generation pass.
///
/// Returns exactly `params.effective_blade_count()` rays, in draw order.
pub fn generate_samples<R: Rng + ?Sized>(
    params: &GenerationParameters,
    anchor: Vec3,
    rng: &mut R,
) -> Vec<Ray> {
    let count = params.effective_blade_count();
    (0..count).map(|_| sample_ray(params, anchor, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5EED)
    }

    #[test]
    fn test_zero_blades() {
        let params = GenerationParameters::new(0, 10.0, Vec2::splat(2.0));
        assert!(generate_samples(&params, Vec3::ZERO, &mut rng()).is_empty());
    }

    #[test]
    fn test_negative_blades() {
        let params = GenerationParameters::new(-1, 10.0, Vec2::splat(2.0));
        assert!(generate_samples(&params, Vec3::ZERO, &mut rng()).is_empty());
    }

    #[test]
    fn test_sample_count() {
        let params = GenerationParameters::new(137, 10.0, Vec2::splat(2.0));
        assert_eq!(generate_samples(&params, Vec3::ZERO, &mut rng()).len(), 137);
    }

    #[test]
    fn test_samples_inside_footprint() {
        let anchor = Vec3::new(12.0, 3.0, -7.5);
        let params = GenerationParameters::new(1000, 50.0, Vec2::new(4.0, 1.5));
        let footprint = Rect::around(anchor, params.footprint_size);

        for ray in generate_samples(&params, anchor, &mut rng()) {
            assert!(footprint.contains_xz(ray.origin), "{:?} outside footprint", ray.origin);
        }
    }

    #[test]
    fn test_cast_height_and_direction() {
        let anchor = Vec3::new(0.0, 25.0, 0.0);
        let params = GenerationParameters::new(64, 300.0, Vec2::splat(8.0));

        for ray in generate_samples(&params, anchor, &mut rng()) {
            // Rays start at the configured height, not relative to the anchor
            assert_eq!(ray.origin.y, 300.0);
            assert_eq!(ray.direction, Vec3::NEG_Y);
        }
    }

    #[test]
    fn test_zero_footprint_collapses_to_anchor() {
        let anchor = Vec3::new(3.0, 0.0, 4.0);
        let params = GenerationParameters::new(5, 10.0, Vec2::ZERO);
        for ray in generate_samples(&params, anchor, &mut rng()) {
            assert_eq!(ray.origin, Vec3::new(3.0, 10.0, 4.0));
        }
    }

    #[test]
    fn test_negative_footprint_does_not_panic() {
        let params = GenerationParameters::new(200, 10.0, Vec2::new(-2.0, -6.0));
        let footprint = Rect::around(Vec3::ZERO, params.footprint_size);
        let samples = generate_samples(&params, Vec3::ZERO, &mut rng());
        assert_eq!(samples.len(), 200);
        assert!(samples.iter().all(|r| footprint.contains_xz(r.origin)));
    }

    #[test]
    fn test_same_seed_same_samples() {
        let params = GenerationParameters::new(32, 10.0, Vec2::splat(5.0));
        let a = generate_samples(&params, Vec3::ZERO, &mut StdRng::seed_from_u64(1));
        let b = generate_samples(&params, Vec3::ZERO, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_samples() {
        let params = GenerationParameters::new(32, 10.0, Vec2::splat(5.0));
        let a = generate_samples(&params, Vec3::ZERO, &mut StdRng::seed_from_u64(1));
        let b = generate_samples(&params, Vec3::ZERO, &mut StdRng::seed_from_u64(2));
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }

    #[test]
    fn test_samples_spread_across_footprint() {
        let params = GenerationParameters::new(2000, 10.0, Vec2::splat(2.0));
        let samples = generate_samples(&params, Vec3::ZERO, &mut rng());

        // Every quadrant of the footprint receives samples
        let mut quadrants = [0usize; 4];
        for ray in &samples {
            let q = (ray.origin.x >= 0.0) as usize | ((ray.origin.z >= 0.0) as usize) << 1;
            quadrants[q] += 1;
        }
        assert!(quadrants.iter().all(|&n| n > 300), "{:?}", quadrants);
    }
}
