//! # Bounded Pre-Filter
//!
//! Crops an input mesh to the triangles touching an axis-aligned box before
//! topology construction. A triangle survives when any of its vertices lies
//! inside the box (inclusive); the vertices of surviving triangles are
//! re-indexed in their original order.

use crate::geometry::Bounds;
use glam::Vec3;
use rayon::prelude::*;

/// Input arrays restricted to the triangles touching a box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundedMesh {
    /// Positions of the kept vertices
    pub positions: Vec<Vec3>,
    /// Normals of the kept vertices
    pub normals: Vec<Vec3>,
    /// Re-indexed triangle indices
    pub indices: Vec<u32>,
}

/// Keeps the triangles with at least one vertex inside `bounds`.
///
/// Inputs must already be validated: equal position and normal counts, whole
/// triangles and in-range indices.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use mesh_topology::bounded::filter_to_bounds;
/// use mesh_topology::Bounds;
///
/// let positions = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(5.0, 5.0, 0.0)];
/// let normals = [Vec3::Z; 4];
/// let bounds = Bounds::new(Vec3::splat(-0.5), Vec3::splat(0.5));
///
/// let cropped = filter_to_bounds(&positions, &normals, &[0, 1, 2, 1, 3, 2], &bounds, 128);
/// assert_eq!(cropped.indices, vec![0, 1, 2]);
/// assert_eq!(cropped.positions.len(), 3);
/// ```
pub fn filter_to_bounds(
    positions: &[Vec3],
    normals: &[Vec3],
    indices: &[u32],
    bounds: &Bounds,
    min_chunk: usize,
) -> BoundedMesh {
    let inside: Vec<bool> = positions
        .par_iter()
        .with_min_len(min_chunk)
        .map(|&p| bounds.contains(p))
        .collect();

    let kept: Vec<&[u32]> = indices
        .chunks_exact(3)
        .filter(|tri| tri.iter().any(|&i| inside[i as usize]))
        .collect();

    let mut required = vec![false; positions.len()];
    for tri in &kept {
        for &i in tri.iter() {
            required[i as usize] = true;
        }
    }

    let mut remap = vec![0u32; positions.len()];
    let mut mesh = BoundedMesh::default();
    for (index, &needed) in required.iter().enumerate() {
        if !needed {
            continue;
        }
        remap[index] = mesh.positions.len() as u32;
        mesh.positions.push(positions[index]);
        mesh.normals.push(normals[index]);
    }

    mesh.indices = kept
        .iter()
        .flat_map(|tri| tri.iter().map(|&i| remap[i as usize]))
        .collect();

    mesh
}
