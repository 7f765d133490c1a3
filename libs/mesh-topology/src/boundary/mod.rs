//! # Boundary Detection
//!
//! Extracts the edges referenced by exactly one triangle and derives the
//! per-edge and overall border normals.
//!
//! ## Submodules
//!
//! - `loops` - orders boundary edges into closed loops and builds the capping
//!   polygon

pub mod loops;

mod tests;

use crate::concurrent::ShardedSet;
use crate::topology::Edge;
use crate::vertex::Vertex;
use config::constants::UP;
use glam::{DVec3, Vec3};
use rayon::prelude::*;

/// Returns indices into `edges` of every boundary edge.
///
/// Each undirected pair is emitted at most once, guarded by a concurrent seen
/// set keyed on both orientations. Degenerate edges (same canonical vertex,
/// hence same spatial key, at both ends) are skipped and never count as
/// boundary. Output is in edge-buffer order.
pub fn detect_boundary_edges(edges: &[Edge], min_chunk: usize) -> Vec<u32> {
    let seen = ShardedSet::with_capacity(edges.len() * 2);

    edges
        .par_iter()
        .enumerate()
        .with_min_len(min_chunk)
        .filter_map(|(index, edge)| {
            if edge.is_degenerate() {
                return None;
            }

            let forward = seen.try_insert((edge.a, edge.b));
            let reverse = seen.try_insert((edge.b, edge.a));
            (forward && reverse && edge.is_boundary()).then_some(index as u32)
        })
        .collect()
}

/// Normal of each boundary edge, oriented toward the up hemisphere.
///
/// For an edge `a → b` the normal is `normalize(cross(b - a, -a))`; degenerate
/// cross products give a zero normal.
pub fn border_edge_normals(
    boundary_edges: &[u32],
    edges: &[Edge],
    vertices: &[Vertex],
    min_chunk: usize,
) -> Vec<Vec3> {
    boundary_edges
        .par_iter()
        .with_min_len(min_chunk)
        .map(|&edge_index| {
            let edge = edges[edge_index as usize];
            let a = vertices[edge.a as usize].position;
            let b = vertices[edge.b as usize].position;

            let normal = (b - a).cross(-a).normalize_or_zero();
            let oriented = if normal.dot(UP) < 0.0 { -normal } else { normal };
            oriented.as_vec3()
        })
        .collect()
}

/// Mean of the boundary edge normals, flipped to agree with `face_normal`.
///
/// Returns `Vec3::ZERO` for a closed mesh.
pub fn border_normal(edge_normals: &[Vec3], face_normal: Vec3) -> Vec3 {
    let sum: DVec3 = edge_normals.iter().map(|n| n.as_dvec3()).sum();
    let normal = sum.normalize_or_zero();
    let oriented = if face_normal.as_dvec3().dot(normal) < 0.0 {
        -normal
    } else {
        normal
    };
    oriented.as_vec3()
}
