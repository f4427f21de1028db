//! Error types for the perceptron.

use core::fmt;

/// # Overview
///
/// Errors that can occur when configuring, training or applying a
/// [`Perceptron`](crate::Perceptron).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidIterations,
    InvalidClasses,
    EmptyDataset,
    DimensionMismatch { expected: usize, got: usize },
    LabelRange { label: usize, n_classes: usize },
    InvalidCost { index: usize }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIterations => write!(f, "max_iterations must be > 0"),
            Self::InvalidClasses => write!(f, "n_classes must be > 0"),
            Self::EmptyDataset => write!(f, "dataset cannot be empty"),
            Self::DimensionMismatch {
                expected,
                got
            } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::LabelRange {
                label,
                n_classes
            } => {
                write!(f, "label {label} out of range for {n_classes} classes")
            }
            Self::InvalidCost {
                index
            } => {
                write!(f, "cost at sample {index} must be finite and non-negative")
            }
        }
    }
}

impl std::error::Error for Error {}

/// # Overview
///
/// Result type for perceptron operations.
pub type Result<T> = core::result::Result<T, Error>;
