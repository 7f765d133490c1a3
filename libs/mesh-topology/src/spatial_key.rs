//! # Spatial Key
//!
//! Quantizes 3D positions into integer buckets for coincidence testing.
//! Two positions whose keys are equal are treated as the same vertex,
//! regardless of float noise below the quantization resolution.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Integer triple identifying a quantization bucket.
///
/// Each axis is `round(coordinate * scale)`. Coordinates whose scaled value
/// exceeds the `i64` range saturate; such inputs are outside the supported
/// domain and may collide.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_topology::SpatialKey;
///
/// let a = SpatialKey::from_position(DVec3::new(1.0, 2.0, 3.0), 10_000);
/// let b = SpatialKey::from_position(DVec3::new(1.000_000_01, 2.0, 3.0), 10_000);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpatialKey {
    /// Bucket along X
    pub x: i64,
    /// Bucket along Y
    pub y: i64,
    /// Bucket along Z
    pub z: i64,
}

impl SpatialKey {
    /// Creates a key from a position and a positive quantization scale.
    #[inline]
    pub fn from_position(position: DVec3, scale: i32) -> Self {
        let scaled = position * f64::from(scale);
        Self {
            x: scaled.x.round() as i64,
            y: scaled.y.round() as i64,
            z: scaled.z.round() as i64,
        }
    }
}
