//! Parallel computation implementations for axis reductions
//!
//! This module contains the actual parallel computation logic for the mean and
//! variance passes. Both kernels walk the output space in parallel and reduce
//! the full cartesian product of the reduction axes for each output element.
//!
//! Unlike a masked reduction, non-finite input values are NOT skipped here:
//! the correction divisor is defined over the fixed element count N, so
//! masking would silently change the estimator. Finite input is a
//! precondition; NaN and infinity propagate into the result.

use crate::errors::{AxistatsError, Result};
use ndarray::ArrayD;
use rayon::prelude::*;

/// Shape of the reduced output with the reduction axes removed
pub(crate) fn kept_shape(shape: &[usize], axes: &[usize]) -> Vec<usize> {
    shape
        .iter()
        .enumerate()
        .filter(|&(dim_idx, _)| !axes.contains(&dim_idx))
        .map(|(_, &size)| size)
        .collect()
}

/// Fill the coordinates of the kept dimensions from a flat output index
///
/// Converts a flat index over the reduced output back to full-rank
/// coordinates, leaving the slots of the reduction axes at zero.
fn fill_kept_coords(flat_idx: usize, shape: &[usize], axes: &[usize], out_shape: &[usize]) -> Vec<usize> {
    let mut coords = vec![0; shape.len()];
    let mut remaining = flat_idx;

    // Fill coordinates, skipping the axes we're reducing over
    let mut coord_idx = 0;
    for dim_idx in 0..shape.len() {
        if !axes.contains(&dim_idx) {
            let stride: usize = out_shape[coord_idx + 1..].iter().product();
            coords[dim_idx] = remaining / stride;
            remaining %= stride;
            coord_idx += 1;
        }
    }

    coords
}

/// Fill the coordinates of the reduction axes from a flat reduction index
fn fill_reduced_coords(flat_idx: usize, axes: &[usize], reduce_shape: &[usize], coords: &mut [usize]) {
    let mut remaining = flat_idx;
    for (pos, &axis) in axes.iter().enumerate() {
        let stride: usize = reduce_shape[pos + 1..].iter().product();
        coords[axis] = remaining / stride;
        remaining %= stride;
    }
}

/// Computes the mean over a set of axes using parallel processing
///
/// Accumulates in f64. The output has the reduction axes removed; callers that
/// want size-1 placeholder axes reshape afterwards.
///
/// # Errors
///
/// Returns an error if the result array cannot be assembled from the computed
/// output shape.
pub fn parallel_mean_axes(data: &ArrayD<f64>, axes: &[usize]) -> Result<ArrayD<f64>> {
    let shape = data.shape();
    let out_shape = kept_shape(shape, axes);
    let output_size: usize = out_shape.iter().product();

    let reduce_shape: Vec<usize> = axes.iter().map(|&axis| shape[axis]).collect();
    let reduce_size: usize = reduce_shape.iter().product();

    println!(
        "⚡ Processing {output_size} output elements across {} CPU cores",
        rayon::current_num_threads()
    );

    let result: Vec<f64> = (0..output_size)
        .into_par_iter()
        .map(|flat_idx| {
            let mut coords = fill_kept_coords(flat_idx, shape, axes, &out_shape);

            // Sum over the full cartesian product of the reduction axes
            let mut sum = 0.0_f64;
            for reduce_idx in 0..reduce_size {
                fill_reduced_coords(reduce_idx, axes, &reduce_shape, &mut coords);
                if let Some(value) = data.get(coords.as_slice()) {
                    sum += value;
                }
            }

            sum / reduce_size as f64
        })
        .collect();

    // Reshape the result back to the expected dimensions
    Ok(ArrayD::from_shape_vec(out_shape, result)?)
}

/// Computes the variance over a set of axes given a precomputed mean
///
/// Second pass of the two-pass algorithm: sums squared deviations from `mean`
/// over the reduction axes and divides by `divisor` (N for the biased
/// estimator, N−1 for the unbiased one). `mean` must be the output of
/// [`parallel_mean_axes`] for the same data and axes.
///
/// # Errors
///
/// Returns an error if `mean` is not contiguous or if the result array cannot
/// be assembled from the computed output shape.
pub fn parallel_variance_axes(
    data: &ArrayD<f64>,
    mean: &ArrayD<f64>,
    axes: &[usize],
    divisor: f64,
) -> Result<ArrayD<f64>> {
    let shape = data.shape();
    let out_shape = kept_shape(shape, axes);
    let output_size: usize = out_shape.iter().product();

    let reduce_shape: Vec<usize> = axes.iter().map(|&axis| shape[axis]).collect();
    let reduce_size: usize = reduce_shape.iter().product();

    // Flat view of the mean: output index i corresponds to mean element i
    let mean_flat = mean.as_slice().ok_or_else(|| {
        AxistatsError::StatisticsError("mean array is not contiguous".to_string())
    })?;

    let result: Vec<f64> = (0..output_size)
        .into_par_iter()
        .map(|flat_idx| {
            let mut coords = fill_kept_coords(flat_idx, shape, axes, &out_shape);
            let center = mean_flat[flat_idx];

            let mut sum_sq = 0.0_f64;
            for reduce_idx in 0..reduce_size {
                fill_reduced_coords(reduce_idx, axes, &reduce_shape, &mut coords);
                if let Some(value) = data.get(coords.as_slice()) {
                    let deviation = value - center;
                    sum_sq += deviation * deviation;
                }
            }

            sum_sq / divisor
        })
        .collect();

    Ok(ArrayD::from_shape_vec(out_shape, result)?)
}
