//! # Boundary Loop Assembly
//!
//! Orders unordered boundary edges head-to-tail into loops, then filters
//! near-collinear points to get the polygon handed to the capping stage.
//!
//! ## Algorithm
//!
//! Boundary edges are laid out flat as vertex pairs `[a0, b0, a1, b1, ...]`.
//! Walking a cursor over the pairs, the pair continuing the current tail is
//! found by forward scan and swapped into the next slot (flipping it when it
//! was stored reversed). A loop closes when the next pair ends at the loop's
//! start vertex. The scan is quadratic in the boundary size.
//!
//! Only a single dominant loop is capped correctly; with several loops the
//! whole buffer is still treated as one polygon.

use crate::topology::Edge;
use crate::vertex::Vertex;
use crate::geometry::angle_degrees;
use rayon::prelude::*;
use tracing::warn;

/// Ordered sequence of boundary vertices. The last vertex connects back to
/// the first when the loop is closed.
#[derive(Debug, Clone, Default)]
pub struct BoundaryLoop {
    /// Vertices in traversal order
    pub vertices: Vec<Vertex>,
    /// Whether the trace returned to its start vertex
    pub closed: bool,
}

impl BoundaryLoop {
    /// Number of vertices (and edges, when closed) in the loop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the loop has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Canonical indices of the loop's vertices.
    #[must_use]
    pub fn canonical_indices(&self) -> Vec<u32> {
        self.vertices.iter().map(|v| v.canonical_index).collect()
    }

    fn from_pairs(pairs: &[Vertex], closed: bool) -> Self {
        Self {
            vertices: pairs.iter().step_by(2).copied().collect(),
            closed,
        }
    }
}

/// Lays out each boundary edge as a `(a, b)` vertex pair in one flat buffer.
pub fn border_vertex_pairs(
    boundary_edges: &[u32],
    edges: &[Edge],
    vertices: &[Vertex],
    min_chunk: usize,
) -> Vec<Vertex> {
    boundary_edges
        .par_iter()
        .with_min_len(min_chunk)
        .flat_map_iter(|&edge_index| {
            let edge = edges[edge_index as usize];
            [vertices[edge.a as usize], vertices[edge.b as usize]]
        })
        .collect()
}

/// Reorders `pairs` in place so consecutive pairs chain head-to-tail.
///
/// Returns the loops found, in buffer order. A trace that cannot be continued
/// ends early and is reported as an open loop; the next pair starts a new one.
pub fn reorder_pairs(pairs: &mut [Vertex]) -> Vec<BoundaryLoop> {
    let len = pairs.len() - pairs.len() % 2;
    let mut loops = Vec::new();
    let mut face_start = 0;
    let mut i = 0;

    while i < len {
        let tail = pairs[i + 1];
        let continued = match find_continuation(pairs, i + 2, len, tail) {
            Some(j) => {
                swap_pairs(pairs, i + 2, j);
                true
            }
            None => false,
        };

        if i + 3 >= len {
            break;
        }

        if !continued && tail != pairs[face_start] {
            warn!(
                start = pairs[face_start].canonical_index,
                stop = tail.canonical_index,
                "boundary trace ended without closing"
            );
            loops.push(BoundaryLoop::from_pairs(&pairs[face_start..i + 2], false));
            i += 2;
            face_start = i;
        } else if pairs[i + 3] == pairs[face_start] {
            loops.push(BoundaryLoop::from_pairs(&pairs[face_start..i + 4], true));
            i += 4;
            face_start = i;
        } else {
            i += 2;
        }
    }

    if face_start < len {
        let rest = &pairs[face_start..len];
        let closed = rest[rest.len() - 1] == rest[0];
        loops.push(BoundaryLoop::from_pairs(rest, closed));
    }

    loops
}

/// Finds the first pair at or after `from` that touches `tail`, flipping it
/// so that `tail` comes first.
fn find_continuation(pairs: &mut [Vertex], from: usize, len: usize, tail: Vertex) -> Option<usize> {
    for j in (from..len).step_by(2) {
        if pairs[j] == tail {
            return Some(j);
        }
        if pairs[j + 1] == tail {
            pairs.swap(j, j + 1);
            return Some(j);
        }
    }
    None
}

fn swap_pairs(pairs: &mut [Vertex], first: usize, second: usize) {
    if first == second {
        return;
    }
    pairs.swap(first, second);
    pairs.swap(first + 1, second + 1);
}

/// Builds the capping polygon from reordered pairs.
///
/// For every pair the shared vertex with the following pair (wrapping to the
/// first) is kept only when the turning angle exceeds `threshold_degrees`.
/// Degenerate directions count as a zero angle and are dropped.
pub fn filter_collinear(pairs: &[Vertex], threshold_degrees: f64, min_chunk: usize) -> Vec<Vertex> {
    let len = pairs.len() - pairs.len() % 2;
    if len == 0 {
        return Vec::new();
    }

    pairs[..len]
        .par_chunks_exact(2)
        .enumerate()
        .with_min_len(min_chunk)
        .filter_map(|(pair, edge)| {
            let start = pair * 2;
            let incoming = edge[1].position - edge[0].position;
            let outgoing = if start == len - 2 {
                pairs[1].position - pairs[0].position
            } else {
                pairs[start + 3].position - pairs[start + 2].position
            };

            let angle = angle_degrees(incoming.normalize_or_zero(), outgoing.normalize_or_zero());
            (angle > threshold_degrees).then_some(edge[1])
        })
        .collect()
}
