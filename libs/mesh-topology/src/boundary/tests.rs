/// Tests for boundary detection and loop assembly.
///
/// These tests verify that:
/// - Only edges with one adjacent triangle are reported
/// - Reversed pairs are flipped while chaining
/// - Collinear points drop out of the capping polygon

#[cfg(test)]
mod tests {
    use crate::boundary::loops::{border_vertex_pairs, filter_collinear, reorder_pairs};
    use crate::boundary::{border_edge_normals, border_normal, detect_boundary_edges};
    use crate::dedup::deduplicate;
    use crate::spatial_key::SpatialKey;
    use crate::topology::{build_triangles, consolidate_edges, Edge};
    use crate::vertex::Vertex;
    use approx::assert_relative_eq;
    use glam::{DVec3, Vec3};

    const SCALE: i32 = 10_000;

    fn vertex(index: u32, position: DVec3) -> Vertex {
        Vertex::new(SpatialKey::from_position(position, SCALE), position, index, index)
    }

    /// Unit square in the XZ plane: vertices, edges, boundary edge indices.
    fn square() -> (Vec<Vertex>, Vec<Edge>, Vec<u32>) {
        let positions = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        let dedup = deduplicate(&positions, &[Vec3::Y; 4], SCALE, 1);
        let (_, raw) = build_triangles(&[0, 1, 2, 0, 2, 3], &dedup.original_to_canonical, 1);
        let edges = consolidate_edges(&raw);
        let boundary = detect_boundary_edges(&edges, 1);
        (dedup.vertices, edges, boundary)
    }

    #[test]
    fn test_square_boundary_skips_diagonal() {
        let (_, edges, boundary) = square();
        assert_eq!(boundary, vec![0, 2, 3, 4]);
        assert!(!boundary.contains(&1));
        assert!(boundary.iter().all(|&e| edges[e as usize].is_boundary()));
    }

    #[test]
    fn test_degenerate_edge_is_not_boundary() {
        let mut edge = Edge::new(4, 4);
        edge.triangle_count = 1;
        assert!(detect_boundary_edges(&[edge], 1).is_empty());
    }

    #[test]
    fn test_square_reorders_into_one_closed_loop() {
        let (vertices, edges, boundary) = square();
        let mut pairs = border_vertex_pairs(&boundary, &edges, &vertices, 1);
        assert_eq!(pairs.len(), 8);

        let loops = reorder_pairs(&mut pairs);
        assert_eq!(loops.len(), 1);
        assert!(loops[0].closed);
        assert_eq!(loops[0].canonical_indices(), vec![0, 1, 2, 3]);

        // Every pair starts where the previous one ended
        for k in (0..pairs.len()).step_by(2) {
            let next = (k + 2) % pairs.len();
            assert_eq!(pairs[k + 1], pairs[next]);
        }
    }

    #[test]
    fn test_square_polygon_starts_at_second_vertex() {
        let (vertices, edges, boundary) = square();
        let mut pairs = border_vertex_pairs(&boundary, &edges, &vertices, 1);
        reorder_pairs(&mut pairs);

        let polygon = filter_collinear(&pairs, 1e-6, 1);
        let indices: Vec<u32> = polygon.iter().map(|v| v.canonical_index).collect();
        assert_eq!(indices, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_collinear_midpoint_is_dropped() {
        let a = vertex(0, DVec3::new(0.0, 0.0, 0.0));
        let m = vertex(1, DVec3::new(0.5, 0.0, 0.0));
        let c = vertex(2, DVec3::new(1.0, 0.0, 0.0));
        let d = vertex(3, DVec3::new(1.0, 0.0, 1.0));
        let e = vertex(4, DVec3::new(0.0, 0.0, 1.0));
        let pairs = [a, m, m, c, c, d, d, e, e, a];

        let polygon = filter_collinear(&pairs, 1e-6, 1);
        let indices: Vec<u32> = polygon.iter().map(|v| v.canonical_index).collect();
        assert_eq!(indices, vec![2, 3, 4, 0]);
    }

    #[test]
    fn test_broken_chain_is_reported_open() {
        let a = vertex(0, DVec3::new(0.0, 0.0, 0.0));
        let b = vertex(1, DVec3::new(1.0, 0.0, 0.0));
        let c = vertex(2, DVec3::new(5.0, 0.0, 0.0));
        let d = vertex(3, DVec3::new(6.0, 0.0, 0.0));
        let mut pairs = [a, b, c, d];

        let loops = reorder_pairs(&mut pairs);
        assert_eq!(loops.len(), 2);
        assert!(!loops[0].closed);
        assert!(!loops[1].closed);
        assert_eq!(loops[0].canonical_indices(), vec![0]);
    }

    #[test]
    fn test_empty_boundary_yields_nothing() {
        let mut pairs: Vec<Vertex> = Vec::new();
        assert!(reorder_pairs(&mut pairs).is_empty());
        assert!(filter_collinear(&pairs, 1e-6, 1).is_empty());
        assert_eq!(border_normal(&[], Vec3::Y), Vec3::ZERO);
    }

    #[test]
    fn test_edge_normals_point_up() {
        let (vertices, edges, boundary) = square();
        let normals = border_edge_normals(&boundary, &edges, &vertices, 1);
        assert_eq!(normals.len(), boundary.len());
        assert!(normals.iter().all(|n| n.y >= 0.0));
    }

    #[test]
    fn test_border_normal_follows_face_normal() {
        let normals = [Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0)];
        let down = border_normal(&normals, Vec3::NEG_Y);
        assert_relative_eq!(down.y, -1.0, epsilon = 1e-6);

        let up = border_normal(&normals, Vec3::Y);
        assert_relative_eq!(up.y, 1.0, epsilon = 1e-6);
    }
}
