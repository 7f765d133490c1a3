//! # Error Types
//!
//! Error types for topology construction. Every variant is a precondition
//! violation detected before any stage runs, or a resource guard.
//!
//! ## Error Policy
//!
//! - Degenerate geometry (zero-area triangles, zero-length edges) is skipped
//!   silently and never surfaces here
//! - A failed build leaves no partial result behind
//! - Errors include the offending values for debugging

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building a [`MeshTopology`](crate::MeshTopology).
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use mesh_topology::{build, MeshTopologyError};
///
/// let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
/// let normals = [Vec3::Z; 2];
///
/// match build(&positions, &normals, &[0, 1, 2], false) {
///     Err(MeshTopologyError::LengthMismatch { positions, normals }) => {
///         assert_eq!((positions, normals), (3, 2));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum MeshTopologyError {
    /// Position and normal arrays differ in length.
    #[error("positions and normals differ in length: {positions} positions, {normals} normals")]
    LengthMismatch {
        /// Number of positions supplied
        positions: usize,
        /// Number of normals supplied
        normals: usize,
    },

    /// Triangle index array does not describe whole triangles.
    #[error("triangle index count {count} is not a multiple of 3")]
    IndexCountNotMultipleOfThree {
        /// Length of the index array
        count: usize,
    },

    /// A triangle references a vertex past the end of the position array.
    #[error("triangle {triangle} references vertex {index} (mesh has {vertex_count} vertices)")]
    IndexOutOfBounds {
        /// Triangle ordinal in the input
        triangle: usize,
        /// The offending vertex index
        index: u32,
        /// Number of input vertices
        vertex_count: usize,
    },

    /// Quantization scale is zero or negative.
    #[error("quantization scale must be positive, got {0}")]
    InvalidQuantizationScale(i32),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Input has more vertices than `u32` indices can address.
    #[error("too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Number of input vertices
        count: usize,
        /// Largest supported vertex count
        max: usize,
    },

    /// Boundary is too large for loop assembly.
    ///
    /// Loop reordering is quadratic, so solidification refuses boundaries
    /// above the configured guard.
    #[error("boundary has {count} edges (max: {max}); raise or disable max_boundary_edges")]
    BoundaryTooLarge {
        /// Boundary edge count found
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// The dedicated worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for topology operations.
pub type TopologyResult<T> = Result<T, MeshTopologyError>;

// =============================================================================
// TESTS
// =============================================================================
