//! # Build Pipeline
//!
//! Runs the stages in dependency order:
//!
//! ```text
//! dedup → triangles/edges → boundary → aggregate
//!                                    ↘ loops → cap → solid aggregate   (solidify only)
//! ```
//!
//! Each stage finishes before its consumer starts; parallelism lives inside
//! the stages. Inputs are validated up front, so a failed build allocates
//! nothing that outlives the call.

use crate::aggregate::{aggregate_triangles, average_face_normal};
use crate::boundary::loops::{border_vertex_pairs, filter_collinear, reorder_pairs};
use crate::boundary::{border_edge_normals, border_normal, detect_boundary_edges};
use crate::bounded::filter_to_bounds;
use crate::dedup::deduplicate;
use crate::error::{MeshTopologyError, TopologyResult};
use crate::geometry::Bounds;
use crate::result::{MeshTopology, SolidVariant};
use crate::solidify::{solid_triangles, triangulate_cap};
use crate::topology::{build_triangles, consolidate_edges, flatten_indices};
use config::constants::TopologyConfig;
use glam::Vec3;
use tracing::{debug, info, warn};

/// Builds the topology of a triangle mesh with the default configuration.
///
/// `indices` holds three entries per triangle. With `solidify` set, open
/// boundaries are capped and a solid variant is built alongside the original.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use mesh_topology::build;
///
/// let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
/// let normals = [Vec3::Z; 3];
/// let topology = build(&positions, &normals, &[0, 1, 2], true)?;
///
/// assert_eq!(topology.boundary_edges().len(), 3);
/// assert_eq!(topology.cap_triangles().len(), 1);
/// assert!(topology.is_solidified());
/// # Ok::<(), mesh_topology::MeshTopologyError>(())
/// ```
pub fn build(positions: &[Vec3], normals: &[Vec3], indices: &[u32], solidify: bool) -> TopologyResult<MeshTopology> {
    build_with_config(positions, normals, indices, solidify, &TopologyConfig::default())
}

/// Builds the topology of a triangle mesh with an explicit configuration.
pub fn build_with_config(
    positions: &[Vec3],
    normals: &[Vec3],
    indices: &[u32],
    solidify: bool,
    config: &TopologyConfig,
) -> TopologyResult<MeshTopology> {
    validate_config(config)?;
    validate_input(positions, normals, indices)?;
    run_in_pool(config, || assemble(positions, normals, indices, solidify, config))?
}

/// Builds the topology of the triangles touching `bounds`.
///
/// See [`filter_to_bounds`] for the cropping rule.
pub fn build_bounded(
    positions: &[Vec3],
    normals: &[Vec3],
    indices: &[u32],
    bounds: &Bounds,
    solidify: bool,
) -> TopologyResult<MeshTopology> {
    build_bounded_with_config(positions, normals, indices, bounds, solidify, &TopologyConfig::default())
}

/// [`build_bounded`] with an explicit configuration.
pub fn build_bounded_with_config(
    positions: &[Vec3],
    normals: &[Vec3],
    indices: &[u32],
    bounds: &Bounds,
    solidify: bool,
    config: &TopologyConfig,
) -> TopologyResult<MeshTopology> {
    validate_config(config)?;
    validate_input(positions, normals, indices)?;

    let cropped = filter_to_bounds(positions, normals, indices, bounds, config.parallel_min_chunk);
    debug!(
        kept_vertices = cropped.positions.len(),
        kept_triangles = cropped.indices.len() / 3,
        input_triangles = indices.len() / 3,
        "cropped mesh to bounds"
    );

    build_with_config(&cropped.positions, &cropped.normals, &cropped.indices, solidify, config)
}

// =============================================================================
// VALIDATION
// =============================================================================

fn validate_config(config: &TopologyConfig) -> TopologyResult<()> {
    if config.quantization_scale <= 0 {
        return Err(MeshTopologyError::InvalidQuantizationScale(config.quantization_scale));
    }
    config.validate()?;
    Ok(())
}

fn validate_input(positions: &[Vec3], normals: &[Vec3], indices: &[u32]) -> TopologyResult<()> {
    if positions.len() != normals.len() {
        return Err(MeshTopologyError::LengthMismatch {
            positions: positions.len(),
            normals: normals.len(),
        });
    }

    let max = u32::MAX as usize;
    if positions.len() > max {
        return Err(MeshTopologyError::TooManyVertices {
            count: positions.len(),
            max,
        });
    }

    if indices.len() % 3 != 0 {
        return Err(MeshTopologyError::IndexCountNotMultipleOfThree { count: indices.len() });
    }

    if let Some((position, &index)) = indices
        .iter()
        .enumerate()
        .find(|&(_, &index)| index as usize >= positions.len())
    {
        return Err(MeshTopologyError::IndexOutOfBounds {
            triangle: position / 3,
            index,
            vertex_count: positions.len(),
        });
    }

    Ok(())
}

// =============================================================================
// EXECUTION
// =============================================================================

fn run_in_pool<T, F>(config: &TopologyConfig, op: F) -> TopologyResult<T>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    match config.worker_threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            Ok(pool.install(op))
        }
        None => Ok(op()),
    }
}

fn assemble(
    positions: &[Vec3],
    normals: &[Vec3],
    indices: &[u32],
    solidify: bool,
    config: &TopologyConfig,
) -> TopologyResult<MeshTopology> {
    let chunk = config.parallel_min_chunk;

    let dedup = deduplicate(positions, normals, config.quantization_scale, chunk);
    debug!(
        input = positions.len(),
        canonical = dedup.vertices.len(),
        "deduplicated vertices"
    );

    let (triangles, raw_edges) = build_triangles(indices, &dedup.original_to_canonical, chunk);
    let edges = consolidate_edges(&raw_edges);
    debug!(triangles = triangles.len(), edges = edges.len(), "built edge topology");

    let boundary_edges = detect_boundary_edges(&edges, chunk);
    let edge_normals = border_edge_normals(&boundary_edges, &edges, &dedup.vertices, chunk);
    let face_normal = average_face_normal(&dedup.subvertices);
    let rim_normal = border_normal(&edge_normals, face_normal);
    debug!(boundary_edges = boundary_edges.len(), "detected boundary");

    let bounds = dedup.bounds.unwrap_or_default();
    let pass = aggregate_triangles(&triangles, &dedup.vertices, chunk);
    let aggregate = pass.to_aggregate(bounds, face_normal, rim_normal);
    debug!(
        surface_area = aggregate.surface_area,
        volume = aggregate.volume,
        "aggregated original triangles"
    );

    let mut boundary_loops = Vec::new();
    let mut cap_polygon = Vec::new();
    let mut cap_triangles = Vec::new();
    let mut solid = None;

    if solidify {
        if let Some(max) = config.max_boundary_edges {
            if boundary_edges.len() > max {
                return Err(MeshTopologyError::BoundaryTooLarge {
                    count: boundary_edges.len(),
                    max,
                });
            }
        }

        let mut pairs = border_vertex_pairs(&boundary_edges, &edges, &dedup.vertices, chunk);
        boundary_loops = reorder_pairs(&mut pairs);
        if boundary_loops.len() > 1 {
            warn!(
                loops = boundary_loops.len(),
                "multiple boundary loops; capping them as a single polygon"
            );
        }

        cap_polygon = filter_collinear(&pairs, config.collinear_threshold_degrees, chunk);
        cap_triangles = triangulate_cap(&cap_polygon);
        debug!(
            loops = boundary_loops.len(),
            polygon = cap_polygon.len(),
            caps = cap_triangles.len(),
            "capped boundary"
        );

        let solid_set = solid_triangles(&triangles, &cap_triangles);
        let solid_pass = aggregate_triangles(&solid_set, &dedup.vertices, chunk);
        let unmatched = consolidate_edges(&crate::topology::raw_edges(&solid_set, chunk))
            .iter()
            .filter(|edge| edge.is_boundary() && !edge.is_degenerate())
            .count();
        if unmatched > 0 {
            warn!(unmatched, "solid variant still has boundary edges");
        }
        solid = Some(SolidVariant {
            boundary_edge_count: unmatched,
            triangle_indices: flatten_indices(&solid_set),
            aggregate: solid_pass.to_aggregate(bounds, face_normal, rim_normal),
            surface: solid_pass.surface,
            triangles: solid_set,
        });
    }

    let vertex_positions: Vec<Vec3> = dedup.vertices.iter().map(|v| v.position.as_vec3()).collect();
    let vertex_points: Vec<f64> = dedup.vertices.iter().flat_map(|v| v.position.to_array()).collect();

    info!(
        vertices = dedup.vertices.len(),
        triangles = triangles.len(),
        edges = edges.len(),
        boundary_edges = boundary_edges.len(),
        solidified = solid.is_some(),
        "built mesh topology"
    );

    Ok(MeshTopology {
        input_vertex_count: positions.len(),
        vertices: dedup.vertices,
        vertex_positions,
        vertex_points,
        subvertices: dedup.subvertices,
        original_to_canonical: dedup.original_to_canonical,
        triangle_indices: flatten_indices(&triangles),
        triangles,
        surface: pass.surface,
        edges,
        boundary_edges,
        border_edge_normals: edge_normals,
        boundary_loops,
        cap_polygon,
        cap_triangles,
        aggregate,
        solid,
        disposed: false,
    })
}
