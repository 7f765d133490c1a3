/// Tests for triangle mapping and edge consolidation.
///
/// These tests verify that:
/// - Triangles keep input order and map through the dedup table
/// - Edge equality is symmetric
/// - Consolidation counts shared edges and keeps first-seen order

#[cfg(test)]
mod tests {
    use crate::topology::{build_triangles, consolidate_edges, flatten_indices, Edge, Triangle};
    use hashbrown::HashSet;

    /// Two triangles sharing the 0-2 diagonal of a square.
    fn square_indices() -> Vec<u32> {
        vec![0, 1, 2, 0, 2, 3]
    }

    #[test]
    fn test_edge_equality_is_symmetric() {
        assert_eq!(Edge::new(3, 9), Edge::new(9, 3));
        assert_ne!(Edge::new(3, 9), Edge::new(3, 8));

        let set: HashSet<Edge> = [Edge::new(1, 2), Edge::new(2, 1)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_triangle_equality_is_winding_sensitive() {
        let a = Triangle::new(Some(0), [0, 1, 2], [0, 1, 2]);
        let b = Triangle::new(Some(5), [4, 5, 6], [0, 1, 2]);
        let c = Triangle::new(Some(0), [0, 2, 1], [0, 2, 1]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_build_triangles_maps_through_dedup() {
        // Input vertex 3 is a duplicate of vertex 0
        let mapping = [0, 1, 2, 0];
        let (triangles, raw) = build_triangles(&[0, 1, 2, 3, 2, 1], &mapping, 1);

        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[1].index, Some(1));
        assert_eq!(triangles[1].original, [3, 2, 1]);
        assert_eq!(triangles[1].canonical, [0, 2, 1]);
        assert_eq!(raw.len(), 6);
        assert_eq!(raw[3], [0, 2]);
    }

    #[test]
    fn test_square_has_five_edges_four_boundary() {
        let mapping = [0, 1, 2, 3];
        let (_, raw) = build_triangles(&square_indices(), &mapping, 1);
        let edges = consolidate_edges(&raw);

        assert_eq!(edges.len(), 5);
        assert_eq!(edges.iter().filter(|e| e.is_boundary()).count(), 4);

        let diagonal = edges.iter().find(|e| **e == Edge::new(2, 0)).unwrap();
        assert_eq!(diagonal.triangle_count, 2);
    }

    #[test]
    fn test_consolidation_keeps_first_seen_order() {
        let edges = consolidate_edges(&[[5, 6], [1, 2], [6, 5], [2, 1], [2, 1]]);
        assert_eq!(edges.len(), 2);
        assert_eq!((edges[0].a, edges[0].b), (5, 6));
        assert_eq!(edges[0].triangle_count, 2);
        assert_eq!(edges[1].triangle_count, 3);
    }

    #[test]
    fn test_collapsed_triangle_emits_no_edges() {
        let mapping = [0, 0, 1];
        let (triangles, raw) = build_triangles(&[0, 1, 2], &mapping, 1);

        assert_eq!(triangles.len(), 1);
        assert!(triangles[0].is_collapsed());
        assert!(raw.is_empty());
    }

    #[test]
    fn test_collapsed_triangle_leaves_neighbour_counts_alone() {
        // Input vertex 4 sits on vertex 0; the sliver [0, 4, 1] collapses
        let mapping = [0, 1, 2, 3, 0];
        let (triangles, raw) = build_triangles(&[0, 1, 2, 0, 2, 3, 0, 4, 1], &mapping, 1);
        let edges = consolidate_edges(&raw);

        assert_eq!(triangles.len(), 3);
        assert_eq!(triangles[2].canonical, [0, 0, 1]);
        assert_eq!(raw.len(), 6);
        assert!(!edges.iter().any(Edge::is_degenerate));

        let rim = edges.iter().find(|e| **e == Edge::new(0, 1)).unwrap();
        assert_eq!(rim.triangle_count, 1);
        assert_eq!(edges.iter().filter(|e| e.is_boundary()).count(), 4);
    }

    #[test]
    fn test_flatten_indices() {
        let mapping = [0, 1, 2, 3];
        let (triangles, _) = build_triangles(&square_indices(), &mapping, 1);
        assert_eq!(flatten_indices(&triangles), square_indices());
    }
}
