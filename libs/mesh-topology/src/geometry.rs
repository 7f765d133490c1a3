//! # Geometry Utilities
//!
//! Low-level geometric operations shared by the boundary, capping and
//! aggregation stages.
//!
//! ## Contents
//!
//! - **Bounds**: axis-aligned box accumulated point by point
//! - **Angles**: degenerate-safe angle between two directions
//! - **Triangles**: area, face normal, signed tetrahedron volume

use config::constants::DEGENERATE_MAGNITUDE;
use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

// =============================================================================
// BOUNDS
// =============================================================================

/// Axis-aligned bounding box.
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use mesh_topology::Bounds;
///
/// let mut bounds = Bounds::from_point(Vec3::ZERO);
/// bounds.encapsulate(Vec3::new(1.0, -2.0, 3.0));
/// assert_eq!(bounds.min, Vec3::new(0.0, -2.0, 0.0));
/// assert!(bounds.contains(Vec3::new(0.5, -1.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Bounds {
    /// Creates bounds from two corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates zero-volume bounds around a single point.
    #[must_use]
    pub fn from_point(point: Vec3) -> Self {
        Self { min: point, max: point }
    }

    /// Creates bounds from a center and total size.
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Grows the box to include `point`.
    pub fn encapsulate(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Returns true if `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Size of the box along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

// =============================================================================
// ANGLES
// =============================================================================

/// Angle between two directions in degrees.
///
/// Inputs need not be normalized. Returns `0.0` when either direction is
/// degenerate (zero length or non-finite).
#[inline]
pub fn angle_degrees(from: DVec3, to: DVec3) -> f64 {
    let magnitude = (from.length_squared() * to.length_squared()).sqrt();
    if magnitude.is_nan() || magnitude < DEGENERATE_MAGNITUDE {
        return 0.0;
    }
    (from.dot(to) / magnitude).clamp(-1.0, 1.0).acos().to_degrees()
}

// =============================================================================
// TRIANGLES
// =============================================================================

/// Area of the triangle `p1 p2 p3` from two edge lengths and the included angle.
#[inline]
pub fn triangle_area(p1: DVec3, p2: DVec3, p3: DVec3) -> f64 {
    let side_a = p2 - p1;
    let side_b = p3 - p1;
    let angle = angle_degrees(side_a, side_b).to_radians();
    side_a.length() * side_b.length() * angle.sin() / 2.0
}

/// Unit face normal following the winding `p1 → p2 → p3`.
///
/// Zero-area triangles yield `DVec3::ZERO`.
#[inline]
pub fn triangle_normal(p1: DVec3, p2: DVec3, p3: DVec3) -> DVec3 {
    (p2 - p1).cross(p3 - p1).normalize_or_zero()
}

/// Signed volume of the tetrahedron spanned by the triangle and the origin.
#[inline]
pub fn signed_volume(p1: DVec3, p2: DVec3, p3: DVec3) -> f64 {
    p1.dot(p2.cross(p3)) / 6.0
}

// =============================================================================
// TESTS
// =============================================================================
