//! Bladecast - grass blade point clouds placed on terrain by downward raycasts

pub mod core;
pub mod math;
pub mod terrain;
pub mod surface;
pub mod grass;
