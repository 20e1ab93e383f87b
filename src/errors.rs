//! Centralized error handling for axistats
//!
//! This module provides structured error types to replace the generic `Box<dyn Error>`
//! pattern, enabling better error context and type safety.

use std::fmt;

/// Main error type for axistats operations
#[derive(Debug)]
pub enum AxistatsError {
    /// Reduction axis index is out of range for the array rank
    InvalidAxis { axis: usize, ndim: usize },

    /// Reduction axis listed more than once
    DuplicateAxis { axis: usize },

    /// Too few elements in the reduction for the requested estimator
    InvalidReductionSize { count: usize, required: usize },

    /// Statistics computation errors
    StatisticsError(String),

    /// Thread pool configuration error
    ThreadPoolError(String),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error for backward compatibility
    Generic(String),
}

impl fmt::Display for AxistatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxistatsError::InvalidAxis { axis, ndim } => write!(
                f,
                "Axis {} is out of bounds for array with {} dimensions",
                axis, ndim
            ),
            AxistatsError::DuplicateAxis { axis } => {
                write!(f, "Axis {} is listed more than once in the reduction axes", axis)
            }
            AxistatsError::InvalidReductionSize { count, required } => write!(
                f,
                "Reduction over {} element(s) is too small: at least {} required",
                count, required
            ),
            AxistatsError::StatisticsError(msg) => {
                write!(f, "Statistics computation error: {}", msg)
            }
            AxistatsError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            AxistatsError::ArrayError(e) => write!(f, "Array error: {}", e),
            AxistatsError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AxistatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AxistatsError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ndarray::ShapeError> for AxistatsError {
    fn from(error: ndarray::ShapeError) -> Self {
        AxistatsError::ArrayError(error)
    }
}

impl From<String> for AxistatsError {
    fn from(error: String) -> Self {
        AxistatsError::Generic(error)
    }
}

impl From<&str> for AxistatsError {
    fn from(error: &str) -> Self {
        AxistatsError::Generic(error.to_string())
    }
}

/// Result type alias for axistats operations
pub type Result<T> = std::result::Result<T, AxistatsError>;
