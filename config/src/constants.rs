//! # Configuration Constants
//!
//! Centralized constants for the mesh topology pipeline. Quantization,
//! collinearity tolerances, parallel batch sizes and resource guards are
//! defined here.
//!
//! ## Categories
//!
//! - **Quantization**: Spatial key scale for vertex coincidence
//! - **Precision**: Angle and magnitude tolerances
//! - **Parallelism**: Batch sizes and worker pool sizing
//! - **Limits**: Guards against pathological boundary sizes

use glam::DVec3;
use thiserror::Error;

// =============================================================================
// QUANTIZATION CONSTANTS
// =============================================================================

/// Default multiplier applied to positions before rounding to a spatial key.
///
/// Two positions whose scaled and rounded coordinates are equal on every axis
/// are treated as the same vertex. `10_000` resolves features down to 0.1 mm
/// for meshes authored in meters.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_QUANTIZATION_SCALE;
///
/// let bucket = (0.12344_f64 * DEFAULT_QUANTIZATION_SCALE as f64).round() as i64;
/// assert_eq!(bucket, 1234);
/// ```
pub const DEFAULT_QUANTIZATION_SCALE: i32 = 10_000;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum turning angle (degrees) for a boundary vertex to be kept.
///
/// Boundary vertices whose incoming and outgoing edges deviate by less than
/// this angle are collinear and dropped from the capping polygon.
pub const COLLINEAR_ANGLE_THRESHOLD_DEGREES: f64 = 1e-6;

/// Magnitude below which a direction product counts as degenerate.
///
/// When the product of two direction lengths falls under this value the angle
/// between them is reported as zero.
pub const DEGENERATE_MAGNITUDE: f64 = 1e-15;

/// Reference up axis used to orient individual boundary edge normals.
///
/// # Example
///
/// ```rust
/// use config::constants::UP;
///
/// assert_eq!(UP.y, 1.0);
/// ```
pub const UP: DVec3 = DVec3::Y;

// =============================================================================
// PARALLELISM CONSTANTS
// =============================================================================

/// Minimum number of elements handed to a single parallel task.
///
/// Small batches cost more in scheduling than they save in work; 128 keeps
/// per-triangle stages worthwhile on meshes with tens of thousands of faces.
pub const PARALLEL_MIN_CHUNK: usize = 128;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Default cap on boundary edges accepted for loop assembly.
///
/// Loop reordering is quadratic in the boundary edge count. Meshes above this
/// limit are rejected when solidification is requested.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MAX_BOUNDARY_EDGES;
///
/// let boundary_edges = 5_000;
/// assert!(boundary_edges > DEFAULT_MAX_BOUNDARY_EDGES);
/// ```
pub const DEFAULT_MAX_BOUNDARY_EDGES: usize = 4_096;

// =============================================================================
// TOPOLOGY CONFIG
// =============================================================================

/// Tunable parameters for one pipeline run.
///
/// # Examples
/// ```
/// use config::constants::TopologyConfig;
/// let cfg = TopologyConfig::new(1_000, 1e-6).expect("valid config");
/// assert_eq!(cfg.quantization_scale, 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopologyConfig {
    /// Spatial key multiplier, must be positive.
    pub quantization_scale: i32,
    /// Collinearity threshold in degrees for the capping polygon filter.
    pub collinear_threshold_degrees: f64,
    /// Maximum boundary edges accepted for loop assembly, `None` disables the guard.
    pub max_boundary_edges: Option<usize>,
    /// Minimum elements per parallel task.
    pub parallel_min_chunk: usize,
    /// Size of a dedicated worker pool, `None` uses the global rayon pool.
    pub worker_threads: Option<usize>,
}

impl TopologyConfig {
    /// Builds a configuration, validating the quantization scale and the
    /// collinearity threshold. Remaining fields take their defaults.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, TopologyConfig};
    /// assert_eq!(
    ///     TopologyConfig::new(0, 1e-6).unwrap_err(),
    ///     ConfigError::InvalidQuantizationScale(0)
    /// );
    /// ```
    pub fn new(quantization_scale: i32, collinear_threshold_degrees: f64) -> Result<Self, ConfigError> {
        let config = Self {
            quantization_scale,
            collinear_threshold_degrees,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against the ranges the pipeline supports.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quantization_scale <= 0 {
            return Err(ConfigError::InvalidQuantizationScale(self.quantization_scale));
        }
        if !self.collinear_threshold_degrees.is_finite() || self.collinear_threshold_degrees < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.collinear_threshold_degrees));
        }
        if self.parallel_min_chunk == 0 {
            return Err(ConfigError::InvalidChunkSize);
        }
        if self.worker_threads == Some(0) {
            return Err(ConfigError::InvalidWorkerThreads);
        }
        Ok(())
    }

    /// Returns a copy with a different quantization scale.
    #[must_use]
    pub fn with_quantization_scale(mut self, scale: i32) -> Self {
        self.quantization_scale = scale;
        self
    }

    /// Returns a copy with a different boundary guard.
    #[must_use]
    pub fn with_max_boundary_edges(mut self, max: Option<usize>) -> Self {
        self.max_boundary_edges = max;
        self
    }

    /// Returns a copy that runs on a dedicated pool of `threads` workers.
    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    /// Returns a copy with a different parallel batch size.
    #[must_use]
    pub fn with_parallel_min_chunk(mut self, chunk: usize) -> Self {
        self.parallel_min_chunk = chunk;
        self
    }
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            quantization_scale: DEFAULT_QUANTIZATION_SCALE,
            collinear_threshold_degrees: COLLINEAR_ANGLE_THRESHOLD_DEGREES,
            max_boundary_edges: Some(DEFAULT_MAX_BOUNDARY_EDGES),
            parallel_min_chunk: PARALLEL_MIN_CHUNK,
            worker_threads: None,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the quantization scale is zero or negative.
    #[error("quantization scale must be positive: {0}")]
    InvalidQuantizationScale(i32),
    /// Raised when the collinearity threshold is negative or not finite.
    #[error("collinear threshold must be a finite non-negative angle: {0}")]
    InvalidThreshold(f64),
    /// Raised when the parallel batch size is zero.
    #[error("parallel_min_chunk must be at least 1")]
    InvalidChunkSize,
    /// Raised when a dedicated pool of zero workers is requested.
    #[error("worker_threads must be at least 1")]
    InvalidWorkerThreads,
}
