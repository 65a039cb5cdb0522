//! Point cloud assembly.
//!
//! Surviving hit points are appended in sample order. Indices are the
//! cloud's own insertion order (0, 1, 2, ...), not the original sample
//! index, so a cloud with misses still has a dense index list.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rayon::prelude::*;
use serde::Serialize;

use crate::core::types::Result;
use crate::math::{Aabb, Ray};
use crate::surface::SurfaceQuery;
use super::projector::project;

/// Primitive topology of a point cloud mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Each vertex is drawn on its own; no edges or faces
    #[default]
    Points,
}

/// GPU vertex for one blade origin. Must match the grass vertex input layout.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
}

/// Blade origins produced by one generation pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PointCloud {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    topology: Topology,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            indices: Vec::with_capacity(capacity),
            topology: Topology::Points,
        }
    }

    /// Append a vertex and its sequential index
    pub fn push(&mut self, point: Vec3) {
        self.indices.push(self.vertices.len() as u32);
        self.vertices.push(point);
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounding box of all vertices, None for an empty cloud
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().copied())
    }

    /// Vertices in GPU layout
    pub fn gpu_vertices(&self) -> Vec<PointVertex> {
        self.vertices
            .iter()
            .map(|v| PointVertex { position: v.to_array() })
            .collect()
    }

    /// Raw index buffer bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl FromIterator<Vec3> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut cloud = PointCloud::with_capacity(iter.size_hint().0);
        for point in iter {
            cloud.push(point);
        }
        cloud
    }
}

/// Consumer of finished point clouds (mesh upload, instancing, export).
///
/// Each submitted cloud replaces whatever the sink held before.
pub trait PointCloudSink {
    fn submit(&mut self, cloud: &PointCloud);
}

impl PointCloudSink for Option<PointCloud> {
    fn submit(&mut self, cloud: &PointCloud) {
        *self = Some(cloud.clone());
    }
}

/// Project every sample in order and collect the hits.
///
/// The first surface error aborts the pass; no partial cloud is returned.
pub fn build<S: SurfaceQuery + ?Sized>(samples: &[Ray], surface: &S) -> Result<PointCloud> {
    let mut cloud = PointCloud::with_capacity(samples.len());
    for ray in samples {
        if let Some(point) = project(ray, surface)? {
            cloud.push(point);
        }
    }
    log::trace!("Projected {} samples, {} missed", samples.len(), samples.len() - cloud.len());
    Ok(cloud)
}

/// Same result as [`build`], with projection spread over the rayon pool.
///
/// Hits are reassembled in sample order before indices are assigned.
pub fn build_parallel<S: SurfaceQuery + Sync + ?Sized>(
    samples: &[Ray],
    surface: &S,
) -> Result<PointCloud> {
    let hits = samples
        .par_iter()
        .map(|ray| project(ray, surface))
        .collect::<Result<Vec<Option<Vec3>>>>()?;

    let cloud: PointCloud = hits.into_iter().flatten().collect();
    log::trace!("Projected {} samples in parallel, {} missed", samples.len(), samples.len() - cloud.len());
    Ok(cloud)
}
