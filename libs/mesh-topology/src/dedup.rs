//! # Vertex Deduplication
//!
//! Builds the canonical vertex buffer and the total original → canonical
//! index mapping.
//!
//! The scan is sequential: the first input index seen for a spatial key wins
//! and becomes the canonical representative, so the mapping is deterministic
//! for a given input order. Subvertex construction is independent per input
//! vertex and runs in parallel.

use crate::geometry::Bounds;
use crate::spatial_key::SpatialKey;
use crate::vertex::{Subvertex, Vertex};
use glam::Vec3;
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use rayon::prelude::*;

/// Output of the deduplication stage.
#[derive(Debug, Clone, Default)]
pub struct DedupOutput {
    /// Canonical vertices, in first-seen order
    pub vertices: Vec<Vertex>,
    /// `original_to_canonical[i]` is the canonical index of input vertex `i`
    pub original_to_canonical: Vec<u32>,
    /// One subvertex per input vertex
    pub subvertices: Vec<Subvertex>,
    /// Bounds of all input positions, `None` for empty input
    pub bounds: Option<Bounds>,
}

/// Deduplicates `positions` by spatial key.
///
/// `positions` and `normals` must have equal length and `scale` must be
/// positive; the pipeline validates both before calling.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use mesh_topology::dedup::deduplicate;
///
/// let positions = [Vec3::ZERO, Vec3::X, Vec3::ZERO];
/// let normals = [Vec3::Y; 3];
/// let out = deduplicate(&positions, &normals, 10_000, 128);
/// assert_eq!(out.vertices.len(), 2);
/// assert_eq!(out.original_to_canonical, vec![0, 1, 0]);
/// ```
pub fn deduplicate(positions: &[Vec3], normals: &[Vec3], scale: i32, min_chunk: usize) -> DedupOutput {
    let mut vertices: Vec<Vertex> = Vec::with_capacity(positions.len());
    let mut original_to_canonical = Vec::with_capacity(positions.len());
    let mut lookup: HashMap<SpatialKey, u32> = HashMap::with_capacity(positions.len());
    let mut bounds: Option<Bounds> = None;

    for (index, &position) in positions.iter().enumerate() {
        match bounds.as_mut() {
            Some(b) => b.encapsulate(position),
            None => bounds = Some(Bounds::from_point(position)),
        }

        let point = position.as_dvec3();
        let key = SpatialKey::from_position(point, scale);

        let canonical = match lookup.entry(key) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let canonical = vertices.len() as u32;
                entry.insert(canonical);
                vertices.push(Vertex::new(key, point, index as u32, canonical));
                canonical
            }
        };
        original_to_canonical.push(canonical);
    }

    let subvertices = positions
        .par_iter()
        .zip(normals.par_iter())
        .enumerate()
        .with_min_len(min_chunk)
        .map(|(index, (&position, &normal))| Subvertex {
            original_index: index as u32,
            normal,
            key: SpatialKey::from_position(position.as_dvec3(), scale),
        })
        .collect();

    DedupOutput {
        vertices,
        original_to_canonical,
        subvertices,
        bounds,
    }
}
