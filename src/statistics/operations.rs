//! Core types and entry points for the mean/std reduction
//!
//! This module defines the fundamental types for the reduction and the public
//! entry functions that replace a fused mean-and-std primitive with two
//! independent passes (mean, then squared deviations) plus an optional
//! additive epsilon before the square root.

use crate::errors::{AxistatsError, Result};
use crate::statistics::parallel::{parallel_mean_axes, parallel_variance_axes};
use ndarray::ArrayD;

/// Variance estimator selection
///
/// `Unbiased` divides the sum of squared deviations by N−1 (sample variance),
/// `Biased` divides by N (population variance), where N is the number of
/// elements covered by the reduction axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Divide by N (population estimator)
    Biased,
    /// Divide by N−1 (sample estimator)
    Unbiased,
}

impl Correction {
    /// Get the string representation of the estimator
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Biased => "biased",
            Self::Unbiased => "unbiased",
        }
    }

    /// Minimum number of reduced elements this estimator is defined for
    #[must_use]
    pub const fn min_count(self) -> usize {
        match self {
            Self::Biased => 1,
            Self::Unbiased => 2,
        }
    }

    /// Divisor applied to the sum of squared deviations
    ///
    /// # Errors
    ///
    /// Returns `InvalidReductionSize` if `count` is below the minimum for this
    /// estimator (the unbiased divisor N−1 is zero for a single element).
    pub fn divisor(self, count: usize) -> Result<f64> {
        if count < self.min_count() {
            return Err(AxistatsError::InvalidReductionSize {
                count,
                required: self.min_count(),
            });
        }

        match self {
            Self::Biased => Ok(count as f64),
            Self::Unbiased => Ok((count - 1) as f64),
        }
    }
}

/// Options controlling a mean/std reduction
#[derive(Debug, Clone, Copy)]
pub struct StdMeanOptions {
    /// Keep reduced axes in the output with size 1 for broadcasting
    pub keep_dims: bool,
    /// Variance estimator (unbiased N−1 by default)
    pub correction: Correction,
    /// Additive guard applied to the variance before the square root.
    /// Zero by default; a small positive value (e.g. 1e-5) keeps the
    /// standard deviation strictly positive on constant input.
    pub epsilon: f64,
}

impl StdMeanOptions {
    /// Create options with explicit values
    #[must_use]
    pub const fn new(keep_dims: bool, correction: Correction, epsilon: f64) -> Self {
        Self {
            keep_dims,
            correction,
            epsilon,
        }
    }

    /// Default options: drop reduced axes, unbiased estimator, no epsilon
    #[must_use]
    pub const fn new_default() -> Self {
        Self::new(false, Correction::Unbiased, 0.0)
    }

    /// Retain reduced axes as size-1 dimensions
    #[must_use]
    pub const fn with_keep_dims(mut self, keep_dims: bool) -> Self {
        self.keep_dims = keep_dims;
        self
    }

    /// Select the variance estimator
    #[must_use]
    pub const fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = correction;
        self
    }

    /// Set the additive epsilon applied before the square root
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Validate the option values
    ///
    /// # Errors
    ///
    /// Returns an error if epsilon is negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(AxistatsError::StatisticsError(format!(
                "epsilon must be a finite non-negative value, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

impl Default for StdMeanOptions {
    fn default() -> Self {
        Self::new_default()
    }
}

/// Result of a mean/std reduction
///
/// Invariant: `std` and `mean` always share the same shape, determined by the
/// input shape, the reduction axes, and the keep-dims flag.
#[derive(Debug)]
pub struct StdMean<T> {
    /// Standard deviation over the reduction axes
    pub std: ArrayD<T>,
    /// Arithmetic mean over the reduction axes
    pub mean: ArrayD<T>,
    /// Axes that were reduced over
    pub reduced_axes: Vec<usize>,
    /// Number of elements covered by each reduction (product of reduced axis sizes)
    pub reduced_count: usize,
}

impl<T> StdMean<T> {
    /// Get the shared shape of the result arrays
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.std.shape()
    }

    /// Get the number of dimensions in the result
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.std.ndim()
    }
}

/// Validate a set of reduction axes against an array rank
///
/// # Errors
///
/// Returns `StatisticsError` for an empty axis list, `InvalidAxis` for an
/// out-of-range index, and `DuplicateAxis` for a repeated index.
pub fn validate_axes(axes: &[usize], ndim: usize) -> Result<()> {
    if axes.is_empty() {
        return Err(AxistatsError::StatisticsError(
            "at least one reduction axis must be specified".to_string(),
        ));
    }

    for (pos, &axis) in axes.iter().enumerate() {
        if axis >= ndim {
            return Err(AxistatsError::InvalidAxis { axis, ndim });
        }
        if axes[..pos].contains(&axis) {
            return Err(AxistatsError::DuplicateAxis { axis });
        }
    }

    Ok(())
}

/// Number of elements covered by one reduction
fn reduction_count(shape: &[usize], axes: &[usize]) -> usize {
    axes.iter().map(|&axis| shape[axis]).product()
}

/// Input shape with the reduced axes collapsed to size 1
fn keep_dims_shape(shape: &[usize], axes: &[usize]) -> Vec<usize> {
    shape
        .iter()
        .enumerate()
        .map(|(dim_idx, &size)| if axes.contains(&dim_idx) { 1 } else { size })
        .collect()
}

/// Computes the mean and standard deviation of an f64 array over a set of axes
///
/// Two-pass algorithm: the mean is computed first, then the variance as the
/// sum of squared deviations from that mean divided by the correction divisor,
/// then `std = sqrt(variance + epsilon)`. With `keep_dims` the reduced axes
/// are retained with size 1 so the results broadcast against the input.
///
/// # Errors
///
/// Returns an error if the axes are invalid, the options are malformed, or
/// the reduction covers too few elements for the requested estimator.
pub fn std_mean_over_axes_f64(
    data: &ArrayD<f64>,
    axes: &[usize],
    options: &StdMeanOptions,
) -> Result<StdMean<f64>> {
    validate_axes(axes, data.ndim())?;
    options.validate()?;

    let count = reduction_count(data.shape(), axes);
    let divisor = options.correction.divisor(count)?;

    println!(
        "⚡ Computing {} mean/std over axes {:?} using parallel processing",
        options.correction.as_str(),
        axes
    );

    let mean = parallel_mean_axes(data, axes)?;
    let variance = parallel_variance_axes(data, &mean, axes, divisor)?;

    let epsilon = options.epsilon;
    let std = variance.mapv(|v| (v + epsilon).sqrt());

    let (std, mean) = if options.keep_dims {
        let keep = keep_dims_shape(data.shape(), axes);
        (std.into_shape(keep.clone())?, mean.into_shape(keep)?)
    } else {
        (std, mean)
    };

    Ok(StdMean {
        std,
        mean,
        reduced_axes: axes.to_vec(),
        reduced_count: count,
    })
}

/// Computes the mean and standard deviation of an f32 array over a set of axes
///
/// Casts through f64 for the accumulation to avoid precision loss, then casts
/// the results back to f32. Same contract as [`std_mean_over_axes_f64`].
///
/// # Errors
///
/// Returns an error under the same conditions as [`std_mean_over_axes_f64`].
#[allow(clippy::cast_possible_truncation)]
pub fn std_mean_over_axes_f32(
    data: &ArrayD<f32>,
    axes: &[usize],
    options: &StdMeanOptions,
) -> Result<StdMean<f32>> {
    // Convert f32 data to f64 for computation to avoid precision loss
    let data_f64: Vec<f64> = data.iter().map(|&x| f64::from(x)).collect();
    let data_f64 = ArrayD::from_shape_vec(data.raw_dim(), data_f64)?;

    let result = std_mean_over_axes_f64(&data_f64, axes, options)?;

    Ok(StdMean {
        std: result.std.mapv(|v| v as f32),
        mean: result.mean.mapv(|v| v as f32),
        reduced_axes: result.reduced_axes,
        reduced_count: result.reduced_count,
    })
}

/// Trait for arrays that can compute mean and standard deviation over axes
pub trait AxisMoments<T> {
    /// Compute the mean and standard deviation over the specified axes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any axis is out of bounds or repeated
    /// - The axis list is empty
    /// - The reduction covers too few elements for the requested estimator
    fn std_mean_over_axes(&self, axes: &[usize], options: &StdMeanOptions) -> Result<StdMean<T>>;

    /// Compute only the standard deviation over the specified axes
    ///
    /// Convenience wrapper for call sites that use the spread as a threshold
    /// and discard the mean. Same contract as [`Self::std_mean_over_axes`].
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Self::std_mean_over_axes`].
    fn std_over_axes(&self, axes: &[usize], options: &StdMeanOptions) -> Result<ArrayD<T>> {
        Ok(self.std_mean_over_axes(axes, options)?.std)
    }
}

impl AxisMoments<f32> for ArrayD<f32> {
    fn std_mean_over_axes(&self, axes: &[usize], options: &StdMeanOptions) -> Result<StdMean<f32>> {
        std_mean_over_axes_f32(self, axes, options)
    }
}

impl AxisMoments<f64> for ArrayD<f64> {
    fn std_mean_over_axes(&self, axes: &[usize], options: &StdMeanOptions) -> Result<StdMean<f64>> {
        std_mean_over_axes_f64(self, axes, options)
    }
}
