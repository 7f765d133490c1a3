//! # Mesh Topology
//!
//! Canonical, deduplicated topology for raw triangle meshes, with boundary
//! detection, optional capping of open boundaries and mass properties.
//!
//! ## Architecture
//!
//! ```text
//! positions, normals, indices
//!     → dedup (spatial keys)
//!     → topology (triangles, counted edges)
//!     → boundary (edges with one triangle)
//!     → loops → solidify (capping fan)        only when solidifying
//!     → aggregate (original, then solid set)
//!     → MeshTopology
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec3;
//! use mesh_topology::build;
//!
//! // Flat square made of two triangles
//! let positions = [
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 1.0),
//!     Vec3::new(0.0, 0.0, 1.0),
//! ];
//! let normals = [Vec3::Y; 4];
//! let topology = build(&positions, &normals, &[0, 1, 2, 0, 2, 3], true)?;
//!
//! assert_eq!(topology.boundary_edges().len(), 4);
//! assert_eq!(topology.boundary_loops().len(), 1);
//! assert_eq!(topology.cap_triangles().len(), 2);
//! # Ok::<(), mesh_topology::MeshTopologyError>(())
//! ```

pub mod aggregate;
pub mod boundary;
pub mod bounded;
pub mod cache;
pub mod concurrent;
pub mod dedup;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod result;
pub mod solidify;
pub mod spatial_key;
pub mod topology;
pub mod vertex;

pub use aggregate::{Aggregate, SurfaceData};
pub use boundary::loops::BoundaryLoop;
pub use error::{MeshTopologyError, TopologyResult};
pub use geometry::Bounds;
pub use pipeline::{build, build_bounded, build_bounded_with_config, build_with_config};
pub use result::{MeshTopology, TopologySummary};
pub use spatial_key::SpatialKey;
pub use topology::{Edge, Triangle};
pub use vertex::{Subvertex, Vertex};

pub use config::constants::TopologyConfig;
