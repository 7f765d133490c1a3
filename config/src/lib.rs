//! # Config Crate
//!
//! Centralized configuration constants for the mesh topology pipeline.
//! All magic numbers and tunable parameters are defined here so that the
//! dedup, boundary and capping stages agree on the same tolerances.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{TopologyConfig, DEFAULT_QUANTIZATION_SCALE};
//!
//! let config = TopologyConfig::default();
//! assert_eq!(config.quantization_scale, DEFAULT_QUANTIZATION_SCALE);
//!
//! // Coarser coincidence buckets for noisy scanned input
//! let coarse = config.with_quantization_scale(100);
//! assert_eq!(coarse.quantization_scale, 100);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: `TopologyConfig::new` rejects values the pipeline cannot use
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
