//! Mathematical utilities and data structures

pub mod aabb;
pub mod ray;
pub mod rect;

pub use aabb::Aabb;
pub use ray::Ray;
pub use rect::Rect;
