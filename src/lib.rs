//! axistats: mean and standard deviation reductions over array axes
//!
//! A Rust library for computing the arithmetic mean and the standard deviation
//! of n-dimensional floating-point arrays over a caller-specified set of
//! reduction axes, using parallel processing. The fused "mean-and-std"
//! primitive is replaced by two independent passes (mean, then squared
//! deviations) plus an optional additive epsilon before the square root.
//!
//! ## Key Features
//!
//! - **Parallel Processing**: Efficient computation using Rayon for multi-core processing
//! - **Multi-Axis Reductions**: Reduce over any set of distinct axes in one call
//! - **Estimator Choice**: Biased (N) or unbiased (N−1) variance, selected per call
//! - **Broadcast-Ready Output**: Optional keep-dims mode retains reduced axes with size 1
//! - **Epsilon Guard**: Configurable additive epsilon keeps the standard deviation
//!   strictly positive on constant input
//!
//! ## Module Organization
//!
//! The library is organized into logical modules:
//!
//! - [`statistics`]: Mean/std reduction types, entry points, and parallel kernels
//! - [`parallel`]: Parallel processing configuration
//! - [`errors`]: Centralized error handling
//!
//! ## Usage Example
//!
//! ```rust
//! use axistats::prelude::*;
//! use ndarray::ArrayD;
//!
//! // A 2x3 array reduced over its second axis
//! let data = ArrayD::from_shape_vec(vec![2, 3], vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//!
//! let result = data
//!     .std_mean_over_axes(&[1], &StdMeanOptions::new_default())
//!     .unwrap();
//!
//! assert_eq!(result.mean.shape(), &[2]);
//! assert_eq!(result.mean[[0]], 2.0);
//! assert_eq!(result.std.shape(), result.mean.shape());
//! ```
//!
//! The library is designed to handle large multi-dimensional arrays efficiently
//! and provides clear error reporting for debugging and analysis.

// Core modules
pub mod errors;
pub mod parallel;
pub mod statistics;

// Direct re-exports for the public API
pub use errors::*;
pub use parallel::*;
pub use statistics::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::errors::{AxistatsError, Result};
    pub use crate::parallel::ParallelConfig;
    pub use crate::statistics::{AxisMoments, Correction, StdMean, StdMeanOptions};
}
