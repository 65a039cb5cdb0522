//! Grass blade point clouds.
//!
//! Blade origins are found by sampling random positions in a rectangular
//! footprint around an anchor and casting each one straight down onto the
//! surface. Samples that miss are dropped. The resulting `PointCloud` is
//! handed to the renderer as point-topology instance origins.
//!
//! `GrassField` owns the inputs, the random source, and the last cloud.
//! Runtime hosts call `generate` once; editing hosts call
//! `regenerate_if_changed` every tick.

pub mod config;
pub mod sampler;
pub mod projector;
pub mod cloud;
pub mod tracker;

pub use config::{GenerationParameters, GrassFieldConfig, DEFAULT_CAST_HEIGHT};
pub use sampler::{generate_samples, sample_ray};
pub use projector::project;
pub use cloud::{build, build_parallel, PointCloud, PointCloudSink, PointVertex, Topology};
pub use tracker::{regenerate_if_changed, ChangeSnapshot, ChangeTracker, TrackerState};

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::types::Result;
use crate::surface::SurfaceQuery;

/// One patch of grass: inputs, random source, and the last built cloud.
pub struct GrassField<R: Rng = StdRng> {
    params: GenerationParameters,
    anchor: Vec3,
    rng: R,
    parallel: bool,
    tracker: ChangeTracker,
    cloud: PointCloud,
}

impl<R: Rng> GrassField<R> {
    pub fn new(params: GenerationParameters, anchor: Vec3, rng: R) -> Self {
        Self {
            params,
            anchor,
            rng,
            parallel: false,
            tracker: ChangeTracker::new(),
            cloud: PointCloud::new(),
        }
    }

    /// Project samples on the rayon pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    pub fn set_parameters(&mut self, params: GenerationParameters) {
        self.params = params;
    }

    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Vec3) {
        self.anchor = anchor;
    }

    /// Cloud from the last successful pass (empty before the first)
    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    fn snapshot(&self) -> ChangeSnapshot {
        ChangeSnapshot::new(self.params, self.anchor)
    }

    /// Run one full generation pass and replace the current cloud.
    ///
    /// On a surface error the previous cloud is kept and the error returned.
    pub fn generate<S: SurfaceQuery + Sync + ?Sized>(&mut self, surface: &S) -> Result<&PointCloud> {
        let snapshot = self.snapshot();
        let samples = generate_samples(&self.params, self.anchor, &mut self.rng);

        let cloud = if self.parallel {
            build_parallel(&samples, surface)
        } else {
            build(&samples, surface)
        };
        let cloud = cloud.inspect_err(|e| log::error!("Grass generation failed: {}", e))?;

        log::debug!(
            "Generated grass at {:?}: {}/{} samples landed",
            self.anchor, cloud.len(), samples.len(),
        );

        self.cloud = cloud;
        self.tracker.commit(snapshot);
        Ok(&self.cloud)
    }

    /// Generate and hand the new cloud to `sink`.
    pub fn generate_into<S, K>(&mut self, surface: &S, sink: &mut K) -> Result<()>
    where
        S: SurfaceQuery + Sync + ?Sized,
        K: PointCloudSink + ?Sized,
    {
        let cloud = self.generate(surface)?;
        sink.submit(cloud);
        Ok(())
    }

    /// Rebuild only if the parameters or anchor changed since the last
    /// successful pass. Returns whether a pass ran.
    pub fn regenerate_if_changed<S: SurfaceQuery + Sync + ?Sized>(&mut self, surface: &S) -> Result<bool> {
        if !self.tracker.poll(&self.snapshot()) {
            return Ok(false);
        }
        self.generate(surface)?;
        Ok(true)
    }
}

impl GrassField<StdRng> {
    /// Field seeded from `seed`, or from OS entropy when None.
    pub fn seeded(params: GenerationParameters, anchor: Vec3, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self::new(params, anchor, rng)
    }

    pub fn from_config(config: &GrassFieldConfig) -> Self {
        Self::seeded(config.parameters, config.anchor, config.seed)
            .with_parallel(config.parallel)
    }

    /// Restart the random sequence; the next pass reproduces a fresh field with this seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
