//! # Topology Builder
//!
//! Converts raw triangles into canonical triangles and an edge buffer with
//! per-edge triangle counts.
//!
//! ## Stages
//!
//! 1. `build_triangles` maps every input triangle through the dedup mapping
//!    (parallel, one task per triangle) and emits three raw edges for each
//!    triangle that did not collapse onto a repeated canonical vertex
//! 2. `consolidate_edges` folds the raw edges into unique undirected edges in
//!    first-seen order, counting how many triangles reference each one

mod tests;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use rayon::prelude::*;
use std::hash::{Hash, Hasher};

// =============================================================================
// TRIANGLE
// =============================================================================

/// Triangle with both its input and canonical vertex indices.
///
/// Equality compares the canonical triple in order; winding matters.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// Ordinal in the input index array, `None` for capping triangles
    pub index: Option<u32>,
    /// Input (pre-dedup) vertex indices
    pub original: [u32; 3],
    /// Canonical (post-dedup) vertex indices
    pub canonical: [u32; 3],
}

impl Triangle {
    /// Creates a triangle.
    pub fn new(index: Option<u32>, original: [u32; 3], canonical: [u32; 3]) -> Self {
        Self {
            index,
            original,
            canonical,
        }
    }

    /// Canonical X index.
    #[inline]
    pub fn x(&self) -> u32 {
        self.canonical[0]
    }

    /// Canonical Y index.
    #[inline]
    pub fn y(&self) -> u32 {
        self.canonical[1]
    }

    /// Canonical Z index.
    #[inline]
    pub fn z(&self) -> u32 {
        self.canonical[2]
    }

    /// True for triangles generated by the capping stage.
    #[inline]
    pub fn is_cap(&self) -> bool {
        self.index.is_none()
    }

    /// Two or more corners share a canonical vertex, so the triangle has zero
    /// area and takes no part in edge adjacency.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        let [x, y, z] = self.canonical;
        x == y || x == z || y == z
    }

    /// The three raw edges in emission order: XY, XZ, YZ.
    #[inline]
    pub fn edges(&self) -> [[u32; 2]; 3] {
        let [x, y, z] = self.canonical;
        [[x, y], [x, z], [y, z]]
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// Undirected edge over canonical vertex indices.
///
/// `Edge::new(a, b) == Edge::new(b, a)`; the triangle count does not take part
/// in equality.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// First endpoint as first seen
    pub a: u32,
    /// Second endpoint as first seen
    pub b: u32,
    /// Number of triangles referencing this edge
    pub triangle_count: u32,
}

impl Edge {
    /// Creates an edge with a zero triangle count.
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b, triangle_count: 0 }
    }

    /// Endpoints ordered low to high.
    #[inline]
    pub fn key(&self) -> (u32, u32) {
        (self.a.min(self.b), self.a.max(self.b))
    }

    /// Referenced by exactly one triangle.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.triangle_count == 1
    }

    /// Both endpoints are the same canonical vertex.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

// =============================================================================
// STAGES
// =============================================================================

/// Builds canonical triangles from the flat input index array.
///
/// Indices must already be validated against the input vertex count. Output
/// order matches input order. Returns every triangle and the raw edge list
/// from [`raw_edges`].
pub fn build_triangles(
    indices: &[u32],
    original_to_canonical: &[u32],
    min_chunk: usize,
) -> (Vec<Triangle>, Vec<[u32; 2]>) {
    let triangles: Vec<Triangle> = indices
        .par_chunks_exact(3)
        .enumerate()
        .with_min_len(min_chunk)
        .map(|(ordinal, tri)| {
            let original = [tri[0], tri[1], tri[2]];
            let canonical = original.map(|i| original_to_canonical[i as usize]);
            Triangle::new(Some(ordinal as u32), original, canonical)
        })
        .collect();

    let raw = raw_edges(&triangles, min_chunk);
    (triangles, raw)
}

/// Raw edges of `triangles` in order, three per triangle.
///
/// Collapsed triangles contribute nothing; their edges would otherwise count
/// twice against a neighbouring edge.
pub fn raw_edges(triangles: &[Triangle], min_chunk: usize) -> Vec<[u32; 2]> {
    triangles
        .par_iter()
        .with_min_len(min_chunk)
        .filter(|triangle| !triangle.is_collapsed())
        .flat_map_iter(|triangle| triangle.edges())
        .collect()
}

/// Folds raw edges into unique undirected edges with triangle counts.
///
/// The first occurrence of an edge fixes its position and endpoint order in
/// the output; later occurrences only increment its count.
///
/// # Example
///
/// ```rust
/// use mesh_topology::topology::consolidate_edges;
///
/// let edges = consolidate_edges(&[[0, 1], [1, 2], [1, 0]]);
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[0].triangle_count, 2);
/// assert_eq!(edges[1].triangle_count, 1);
/// ```
pub fn consolidate_edges(raw_edges: &[[u32; 2]]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = Vec::with_capacity(raw_edges.len() / 2);
    let mut lookup: HashMap<(u32, u32), usize> = HashMap::with_capacity(raw_edges.len() / 2);

    for &[a, b] in raw_edges {
        let edge = Edge::new(a, b);
        match lookup.entry(edge.key()) {
            Entry::Occupied(entry) => edges[*entry.get()].triangle_count += 1,
            Entry::Vacant(entry) => {
                entry.insert(edges.len());
                edges.push(Edge { triangle_count: 1, ..edge });
            }
        }
    }

    edges
}

/// Flattens triangles into an `x, y, z, x, y, z, ...` canonical index buffer.
pub fn flatten_indices(triangles: &[Triangle]) -> Vec<u32> {
    triangles.iter().flat_map(|t| t.canonical).collect()
}
