//! # Vertex Records
//!
//! Canonical vertices produced by deduplication, and the per-original-vertex
//! subvertices that keep every input normal for normal averaging.

use crate::spatial_key::SpatialKey;
use glam::{DVec3, Vec3};
use std::hash::{Hash, Hasher};

/// Deduplicated representative of one or more coincident input vertices.
///
/// Equality and hashing use the spatial key only, so two vertices in the same
/// quantization bucket compare equal whatever their exact positions.
///
/// Positions are stored as `f64` so aggregation does not accumulate `f32`
/// rounding error.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    /// Quantization bucket
    pub key: SpatialKey,
    /// Position of the first input vertex mapped here
    pub position: DVec3,
    /// First input index mapped to this vertex
    pub original_index: u32,
    /// Index of this vertex in the canonical buffer
    pub canonical_index: u32,
}

impl Vertex {
    /// Creates a canonical vertex.
    pub fn new(key: SpatialKey, position: DVec3, original_index: u32, canonical_index: u32) -> Self {
        Self {
            key,
            position,
            original_index,
            canonical_index,
        }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// One record per input vertex carrying its own normal.
///
/// Subvertices are never merged. The key groups coincident-position normals
/// when hashed, equality follows the key.
#[derive(Debug, Clone, Copy)]
pub struct Subvertex {
    /// Input index
    pub original_index: u32,
    /// Input normal
    pub normal: Vec3,
    /// Quantization bucket of the input position
    pub key: SpatialKey,
}

impl PartialEq for Subvertex {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Subvertex {}

impl Hash for Subvertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn test_vertex_equality_ignores_indices() {
        let key = SpatialKey::from_position(DVec3::ONE, 10_000);
        let a = Vertex::new(key, DVec3::ONE, 0, 0);
        let b = Vertex::new(key, DVec3::new(1.000_000_1, 1.0, 1.0), 7, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_subvertices_group_by_position() {
        let key = SpatialKey::from_position(DVec3::ZERO, 10_000);
        let up = Subvertex { original_index: 0, normal: Vec3::Y, key };
        let side = Subvertex { original_index: 1, normal: Vec3::X, key };
        let set: HashSet<Subvertex> = [up, side].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
