//! Grass point cloud configuration.
//!
//! `GenerationParameters` is the per-field input to a generation pass.
//! `GrassFieldConfig` is the file-level form loaded by hosts such as the
//! `generate_grass` binary.

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::terrain::TerrainParams;

/// Default ray start height in world units
pub const DEFAULT_CAST_HEIGHT: f32 = 1000.0;

/// Inputs to one generation pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    /// How many sample rays are cast. Negative counts produce an empty cloud.
    pub blade_count: i32,
    /// World-space Y the sample rays start from.
    pub cast_height: f32,
    /// Footprint extents: `x` along world X, `y` along world Z.
    pub footprint_size: Vec2,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            blade_count: 0,
            cast_height: DEFAULT_CAST_HEIGHT,
            footprint_size: Vec2::ZERO,
        }
    }
}

impl GenerationParameters {
    pub fn new(blade_count: i32, cast_height: f32, footprint_size: Vec2) -> Self {
        Self { blade_count, cast_height, footprint_size }
    }

    /// True when every float is finite and the blade count is non-negative
    pub fn is_valid(&self) -> bool {
        self.blade_count >= 0
            && self.cast_height.is_finite()
            && self.footprint_size.is_finite()
    }

    /// Number of samples a pass actually draws.
    ///
    /// Invalid parameters are treated as zero samples rather than an error.
    pub fn effective_blade_count(&self) -> usize {
        if !self.is_valid() {
            log::warn!(
                "Invalid grass parameters (blade_count={}, cast_height={}, footprint={:?}), generating no blades",
                self.blade_count, self.cast_height, self.footprint_size,
            );
            return 0;
        }
        self.blade_count as usize
    }
}

/// File-level configuration for a grass field and its demo terrain.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrassFieldConfig {
    pub parameters: GenerationParameters,
    /// World position the footprint is centered on.
    pub anchor: Vec3,
    /// Fixed RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Project samples on the rayon pool instead of sequentially.
    pub parallel: bool,
    /// Heightfield the host binary casts against.
    pub terrain: TerrainParams,
}

impl GrassFieldConfig {
    /// Save to file as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}
