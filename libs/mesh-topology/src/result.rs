//! # Mesh Topology Result
//!
//! The immutable product of a build. All buffers are owned here and exposed
//! through read-only accessors until [`MeshTopology::dispose`] releases them.

use crate::aggregate::{Aggregate, SurfaceData};
use crate::boundary::loops::BoundaryLoop;
use crate::geometry::Bounds;
use crate::topology::{Edge, Triangle};
use crate::vertex::{Subvertex, Vertex};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Triangle set closed by capping, with its own surface data and aggregate.
#[derive(Debug, Clone, Default)]
pub(crate) struct SolidVariant {
    pub(crate) triangles: Vec<Triangle>,
    pub(crate) triangle_indices: Vec<u32>,
    pub(crate) surface: SurfaceData,
    pub(crate) aggregate: Aggregate,
    pub(crate) boundary_edge_count: usize,
}

/// Canonical topology of a triangle mesh with boundary and mass data.
///
/// Built by [`build`](crate::build) and friends. Accessors must not be called
/// after [`dispose`](Self::dispose); debug builds panic if they are.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use mesh_topology::build;
///
/// let positions = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 0.0, 1.0), Vec3::Z];
/// let normals = [Vec3::Y; 4];
///
/// let mut topology = build(&positions, &normals, &[0, 1, 2, 0, 2, 3], false)?;
/// assert_eq!(topology.edge_count(), 5);
/// assert_eq!(topology.boundary_edges().len(), 4);
/// assert!(!topology.is_solid());
///
/// topology.dispose();
/// # Ok::<(), mesh_topology::MeshTopologyError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshTopology {
    pub(crate) input_vertex_count: usize,
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) vertex_positions: Vec<Vec3>,
    pub(crate) vertex_points: Vec<f64>,
    pub(crate) subvertices: Vec<Subvertex>,
    pub(crate) original_to_canonical: Vec<u32>,
    pub(crate) triangles: Vec<Triangle>,
    pub(crate) triangle_indices: Vec<u32>,
    pub(crate) surface: SurfaceData,
    pub(crate) edges: Vec<Edge>,
    pub(crate) boundary_edges: Vec<u32>,
    pub(crate) border_edge_normals: Vec<Vec3>,
    pub(crate) boundary_loops: Vec<BoundaryLoop>,
    pub(crate) cap_polygon: Vec<Vertex>,
    pub(crate) cap_triangles: Vec<Triangle>,
    pub(crate) aggregate: Aggregate,
    pub(crate) solid: Option<SolidVariant>,
    pub(crate) disposed: bool,
}

impl MeshTopology {
    #[inline]
    fn check_live(&self) {
        debug_assert!(!self.disposed, "MeshTopology used after dispose");
    }

    // -------------------------------------------------------------------------
    // Aggregates
    // -------------------------------------------------------------------------

    /// Aggregate of the original triangle set.
    pub fn aggregate(&self) -> &Aggregate {
        self.check_live();
        &self.aggregate
    }

    /// Aggregate of the solid triangle set, if solidification ran.
    pub fn solid_aggregate(&self) -> Option<&Aggregate> {
        self.check_live();
        self.solid.as_ref().map(|s| &s.aggregate)
    }

    /// Bounds of the input positions.
    pub fn bounds(&self) -> Bounds {
        self.aggregate().bounds
    }

    /// Signed volume of the original triangle set.
    pub fn volume(&self) -> f32 {
        self.aggregate().volume
    }

    /// Total area of the original triangle set.
    pub fn surface_area(&self) -> f32 {
        self.aggregate().surface_area
    }

    /// Center of mass of the original triangle set.
    pub fn center_of_mass(&self) -> Vec3 {
        self.aggregate().center_of_mass
    }

    /// Normalized mean of all input normals.
    pub fn average_face_normal(&self) -> Vec3 {
        self.aggregate().average_face_normal
    }

    /// Normalized mean of the boundary edge normals, zero when closed.
    pub fn border_normal(&self) -> Vec3 {
        self.aggregate().border_normal
    }

    /// True when the mesh has no boundary edges.
    pub fn is_solid(&self) -> bool {
        self.check_live();
        self.boundary_edges.is_empty()
    }

    /// True when the solid variant was built.
    pub fn is_solidified(&self) -> bool {
        self.check_live();
        self.solid.is_some()
    }

    // -------------------------------------------------------------------------
    // Buffers
    // -------------------------------------------------------------------------

    /// Number of vertices supplied to the build.
    pub fn input_vertex_count(&self) -> usize {
        self.check_live();
        self.input_vertex_count
    }

    /// Number of canonical vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of original triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles().len()
    }

    /// Number of unique undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Canonical vertices.
    pub fn vertices(&self) -> &[Vertex] {
        self.check_live();
        &self.vertices
    }

    /// Canonical vertex positions.
    pub fn vertex_positions(&self) -> &[Vec3] {
        self.check_live();
        &self.vertex_positions
    }

    /// Canonical vertex positions as flat `x, y, z` doubles.
    pub fn vertex_points(&self) -> &[f64] {
        self.check_live();
        &self.vertex_points
    }

    /// One record per input vertex with its normal.
    pub fn subvertices(&self) -> &[Subvertex] {
        self.check_live();
        &self.subvertices
    }

    /// Canonical index of each input vertex.
    pub fn original_to_canonical(&self) -> &[u32] {
        self.check_live();
        &self.original_to_canonical
    }

    /// Original triangles in input order.
    pub fn triangles(&self) -> &[Triangle] {
        self.check_live();
        &self.triangles
    }

    /// Flattened canonical indices of the original triangles.
    pub fn triangle_indices(&self) -> &[u32] {
        self.check_live();
        &self.triangle_indices
    }

    /// Per-triangle data for the original set.
    pub fn surface_data(&self) -> &SurfaceData {
        self.check_live();
        &self.surface
    }

    /// Original triangles followed by the capping triangles.
    pub fn solid_triangles(&self) -> Option<&[Triangle]> {
        self.check_live();
        self.solid.as_ref().map(|s| s.triangles.as_slice())
    }

    /// Flattened canonical indices of the solid set.
    pub fn solid_triangle_indices(&self) -> Option<&[u32]> {
        self.check_live();
        self.solid.as_ref().map(|s| s.triangle_indices.as_slice())
    }

    /// Per-triangle data for the solid set.
    pub fn solid_surface_data(&self) -> Option<&SurfaceData> {
        self.check_live();
        self.solid.as_ref().map(|s| &s.surface)
    }

    /// Edges of the solid set with one adjacent triangle; zero when capping
    /// closed every boundary.
    pub fn solid_boundary_edge_count(&self) -> Option<usize> {
        self.check_live();
        self.solid.as_ref().map(|s| s.boundary_edge_count)
    }

    /// True when the solid variant was built and has no boundary edges.
    pub fn is_watertight(&self) -> bool {
        self.solid_boundary_edge_count() == Some(0)
    }

    /// Unique undirected edges in first-seen order.
    pub fn edges(&self) -> &[Edge] {
        self.check_live();
        &self.edges
    }

    /// Indices into [`edges`](Self::edges) of the boundary edges.
    pub fn boundary_edges(&self) -> &[u32] {
        self.check_live();
        &self.boundary_edges
    }

    /// Normal of each boundary edge, parallel to [`boundary_edges`](Self::boundary_edges).
    pub fn border_edge_normals(&self) -> &[Vec3] {
        self.check_live();
        &self.border_edge_normals
    }

    /// Boundary loops found while solidifying. Empty otherwise.
    pub fn boundary_loops(&self) -> &[BoundaryLoop] {
        self.check_live();
        &self.boundary_loops
    }

    /// Polygon that was capped, after collinear filtering.
    pub fn cap_polygon(&self) -> &[Vertex] {
        self.check_live();
        &self.cap_polygon
    }

    /// Triangles added by capping.
    pub fn cap_triangles(&self) -> &[Triangle] {
        self.check_live();
        &self.cap_triangles
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Releases every buffer. Calling it again is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.vertices = Vec::new();
        self.vertex_positions = Vec::new();
        self.vertex_points = Vec::new();
        self.subvertices = Vec::new();
        self.original_to_canonical = Vec::new();
        self.triangles = Vec::new();
        self.triangle_indices = Vec::new();
        self.surface.clear();
        self.edges = Vec::new();
        self.boundary_edges = Vec::new();
        self.border_edge_normals = Vec::new();
        self.boundary_loops = Vec::new();
        self.cap_polygon = Vec::new();
        self.cap_triangles = Vec::new();
        self.solid = None;
        self.disposed = true;
    }

    /// True once [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Serializable snapshot of counts and aggregates.
    pub fn summary(&self) -> TopologySummary {
        TopologySummary {
            input_vertex_count: self.input_vertex_count(),
            vertex_count: self.vertex_count(),
            triangle_count: self.triangle_count(),
            edge_count: self.edge_count(),
            boundary_edge_count: self.boundary_edges.len(),
            solid_boundary_edge_count: self.solid_boundary_edge_count(),
            boundary_loop_count: self.boundary_loops.len(),
            cap_triangle_count: self.cap_triangles.len(),
            is_solid: self.is_solid(),
            is_solidified: self.is_solidified(),
            aggregate: self.aggregate,
            solid_aggregate: self.solid.as_ref().map(|s| s.aggregate),
        }
    }
}

/// Counts and aggregates of a [`MeshTopology`], detached from its buffers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologySummary {
    /// Vertices supplied to the build
    pub input_vertex_count: usize,
    /// Canonical vertices
    pub vertex_count: usize,
    /// Original triangles
    pub triangle_count: usize,
    /// Unique undirected edges
    pub edge_count: usize,
    /// Edges with one adjacent triangle
    pub boundary_edge_count: usize,
    /// Edges of the solid set with one adjacent triangle
    pub solid_boundary_edge_count: Option<usize>,
    /// Loops assembled while solidifying
    pub boundary_loop_count: usize,
    /// Triangles added by capping
    pub cap_triangle_count: usize,
    /// No boundary edges
    pub is_solid: bool,
    /// Solid variant built
    pub is_solidified: bool,
    /// Original set
    pub aggregate: Aggregate,
    /// Solid set
    pub solid_aggregate: Option<Aggregate>,
}
