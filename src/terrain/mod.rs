//! Procedural terrain heights for heightfield surfaces

pub mod generator;
pub use generator::{TerrainGenerator, TerrainParams};
