//! # Geometric Aggregation
//!
//! Per-triangle surface data and whole-mesh mass properties.
//!
//! ## Reductions
//!
//! Per-triangle samples are computed in parallel and collected in triangle
//! order, then summed sequentially in `f64`. The sums are therefore identical
//! from run to run regardless of worker count.
//!
//! - **Volume**: sum of the signed tetrahedra formed with the origin; exact
//!   for closed surfaces only
//! - **Center of mass**: sum of `volume_i * (p1 + p2 + p3) / 4`, divided by
//!   the number of contributing triangles

use crate::geometry::{signed_volume, triangle_area, triangle_normal, Bounds};
use crate::topology::Triangle;
use crate::vertex::{Subvertex, Vertex};
use glam::{DVec3, Vec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Scalar and vector summaries of one triangle set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aggregate {
    /// Sum of triangle areas
    pub surface_area: f32,
    /// Signed enclosed volume
    pub volume: f32,
    /// Volume-weighted centroid (see module docs for normalization)
    pub center_of_mass: Vec3,
    /// Bounds of the input positions
    pub bounds: Bounds,
    /// Normalized mean of all input normals
    pub average_face_normal: Vec3,
    /// Normalized mean of the boundary edge normals, zero when closed
    pub border_normal: Vec3,
}

/// Per-triangle area, face normal and midpoint, indexed like the triangle set.
#[derive(Debug, Clone, Default)]
pub struct SurfaceData {
    /// Triangle areas
    pub areas: Vec<f32>,
    /// Unit face normals, zero for degenerate triangles
    pub face_normals: Vec<Vec3>,
    /// Unweighted vertex means
    pub midpoints: Vec<Vec3>,
}

impl SurfaceData {
    /// Number of triangles described.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns true if no triangles are described.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.areas = Vec::new();
        self.face_normals = Vec::new();
        self.midpoints = Vec::new();
    }
}

/// Result of one aggregation pass over a triangle set.
#[derive(Debug, Clone, Default)]
pub struct TriangleAggregation {
    /// Per-triangle data
    pub surface: SurfaceData,
    /// Total area
    pub surface_area: f64,
    /// Signed volume
    pub volume: f64,
    /// Averaged centroid sum
    pub center_of_mass: DVec3,
}

impl TriangleAggregation {
    /// Combines the pass with mesh-wide values into an [`Aggregate`].
    pub fn to_aggregate(&self, bounds: Bounds, average_face_normal: Vec3, border_normal: Vec3) -> Aggregate {
        Aggregate {
            surface_area: self.surface_area as f32,
            volume: self.volume as f32,
            center_of_mass: self.center_of_mass.as_vec3(),
            bounds,
            average_face_normal,
            border_normal,
        }
    }
}

struct TriangleSample {
    area: f64,
    normal: DVec3,
    midpoint: DVec3,
    volume: f64,
    moment: DVec3,
}

/// Runs one aggregation pass over `triangles`.
///
/// Triangle canonical indices must be valid for `vertices`.
pub fn aggregate_triangles(triangles: &[Triangle], vertices: &[Vertex], min_chunk: usize) -> TriangleAggregation {
    let samples: Vec<TriangleSample> = triangles
        .par_iter()
        .with_min_len(min_chunk)
        .map(|triangle| {
            let [p1, p2, p3] = triangle.canonical.map(|i| vertices[i as usize].position);
            let volume = signed_volume(p1, p2, p3);
            TriangleSample {
                area: triangle_area(p1, p2, p3),
                normal: triangle_normal(p1, p2, p3),
                midpoint: (p1 + p2 + p3) / 3.0,
                volume,
                moment: volume * (p1 + p2 + p3) / 4.0,
            }
        })
        .collect();

    let mut surface = SurfaceData {
        areas: Vec::with_capacity(samples.len()),
        face_normals: Vec::with_capacity(samples.len()),
        midpoints: Vec::with_capacity(samples.len()),
    };
    let mut surface_area = 0.0;
    let mut volume = 0.0;
    let mut moment = DVec3::ZERO;

    for sample in &samples {
        surface.areas.push(sample.area as f32);
        surface.face_normals.push(sample.normal.as_vec3());
        surface.midpoints.push(sample.midpoint.as_vec3());
        surface_area += sample.area;
        volume += sample.volume;
        moment += sample.moment;
    }

    let center_of_mass = if samples.is_empty() {
        DVec3::ZERO
    } else {
        moment / samples.len() as f64
    };

    TriangleAggregation {
        surface,
        surface_area,
        volume,
        center_of_mass,
    }
}

/// Normalized mean of every input normal, `Vec3::ZERO` when they cancel out.
pub fn average_face_normal(subvertices: &[Subvertex]) -> Vec3 {
    let sum: DVec3 = subvertices.iter().map(|s| s.normal.as_dvec3()).sum();
    sum.normalize_or_zero().as_vec3()
}
