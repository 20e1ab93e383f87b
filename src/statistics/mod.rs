//! Mean and standard deviation reductions over array axes
//!
//! This module provides the two-pass mean/std reduction over specified axes
//! of n-dimensional arrays using parallel processing.
//!
//! # Organization
//!
//! This module is organized into submodules:
//! - [`operations`]: Core types, validation, and the public entry points
//! - [`parallel`]: Parallel computation implementations

pub mod operations;
pub mod parallel;

// Re-export the main types and functions for convenience
pub use operations::{
    std_mean_over_axes_f32, std_mean_over_axes_f64, validate_axes, AxisMoments, Correction,
    StdMean, StdMeanOptions,
};
pub use parallel::{parallel_mean_axes, parallel_variance_axes};
