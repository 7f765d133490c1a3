//! # Capping Triangulation
//!
//! Closes an open boundary by triangulating its polygon with an
//! alternating-ends fan.
//!
//! Starting from a forward cursor at the first vertex and a backward cursor
//! at the last, each step emits `(backward, forward, candidate)` and moves the
//! forward and backward cursors in turn to the candidate. The walk stops when
//! the candidate meets either cursor, giving `n - 2` triangles for an
//! `n`-vertex polygon.
//!
//! The fan is valid for simple, roughly convex polygons. Strongly non-convex
//! or self-intersecting boundaries produce overlapping caps.

use crate::topology::Triangle;
use crate::vertex::Vertex;

/// Triangulates `polygon` into capping triangles.
///
/// Polygons with fewer than three vertices produce no triangles. Capping
/// triangles carry no input ordinal; their original indices are the first
/// input indices of the polygon vertices.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_topology::solidify::triangulate_cap;
/// use mesh_topology::{SpatialKey, Vertex};
///
/// let polygon: Vec<Vertex> = (0..5u32)
///     .map(|i| {
///         let p = DVec3::new(f64::from(i).cos(), 0.0, f64::from(i).sin());
///         Vertex::new(SpatialKey::from_position(p, 10_000), p, i, i)
///     })
///     .collect();
///
/// let caps = triangulate_cap(&polygon);
/// assert_eq!(caps.len(), 3);
/// assert!(caps.iter().all(|t| t.is_cap()));
/// ```
pub fn triangulate_cap(polygon: &[Vertex]) -> Vec<Triangle> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let mut caps = Vec::with_capacity(polygon.len() - 2);
    let mut forward = 0;
    let mut backward = polygon.len() - 1;
    let mut candidate = 1;
    let mut advance_forward = true;

    while candidate != forward && candidate != backward {
        let corners = [polygon[backward], polygon[forward], polygon[candidate]];
        caps.push(Triangle::new(
            None,
            corners.map(|v| v.original_index),
            corners.map(|v| v.canonical_index),
        ));

        if advance_forward {
            forward = candidate;
        } else {
            backward = candidate;
        }
        advance_forward = !advance_forward;
        candidate = if advance_forward { forward + 1 } else { backward - 1 };
    }

    caps
}

/// Appends `caps` after `triangles`, preserving the order of both.
pub fn solid_triangles(triangles: &[Triangle], caps: &[Triangle]) -> Vec<Triangle> {
    let mut solid = Vec::with_capacity(triangles.len() + caps.len());
    solid.extend_from_slice(triangles);
    solid.extend_from_slice(caps);
    solid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial_key::SpatialKey;
    use glam::DVec3;

    fn ring(count: u32) -> Vec<Vertex> {
        (0..count)
            .map(|i| {
                let angle = std::f64::consts::TAU * f64::from(i) / f64::from(count);
                let p = DVec3::new(angle.cos(), 0.0, angle.sin());
                Vertex::new(SpatialKey::from_position(p, 10_000), p, i + 100, i)
            })
            .collect()
    }

    #[test]
    fn test_cap_counts() {
        assert_eq!(triangulate_cap(&ring(8)).len(), 6);
        assert_eq!(triangulate_cap(&ring(4)).len(), 2);
        assert_eq!(triangulate_cap(&ring(3)).len(), 1);
    }

    #[test]
    fn test_short_polygons_yield_nothing() {
        assert!(triangulate_cap(&[]).is_empty());
        assert!(triangulate_cap(&ring(1)).is_empty());
        assert!(triangulate_cap(&ring(2)).is_empty());
    }

    #[test]
    fn test_zigzag_order() {
        let caps = triangulate_cap(&ring(5));
        let canonical: Vec<[u32; 3]> = caps.iter().map(|t| t.canonical).collect();
        assert_eq!(canonical, vec![[4, 0, 1], [4, 1, 3], [3, 1, 2]]);
        assert_eq!(caps[0].original, [104, 100, 101]);
        assert!(caps.iter().all(Triangle::is_cap));
    }

    #[test]
    fn test_solid_set_appends_caps() {
        let original = vec![Triangle::new(Some(0), [0, 1, 2], [0, 1, 2])];
        let caps = triangulate_cap(&ring(3));
        let solid = solid_triangles(&original, &caps);
        assert_eq!(solid.len(), 2);
        assert_eq!(solid[0].index, Some(0));
        assert!(solid[1].is_cap());
    }
}
