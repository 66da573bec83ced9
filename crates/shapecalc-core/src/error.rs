//! Error handling for shapecalc
//!
//! Provides the error types for every layer of the calculator:
//! - Parameter errors (arity and geometric constraints)
//! - Shape errors (lookup, validation and metric applicability)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::shape::{Dimension, MetricKind};
use thiserror::Error;

/// Parameter validation error
///
/// Describes why a parameter set was rejected by a shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Number of values does not match the shape's parameter list
    #[error("Expected {expected} parameters, got {actual}")]
    WrongArity {
        /// The number of parameters the shape requires.
        expected: usize,
        /// The number of parameters supplied.
        actual: usize,
    },

    /// A measurement is zero, negative or not a finite number
    #[error("Parameter '{name}' must be a positive number, got {value}")]
    NonPositive {
        /// The label of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Three side lengths that cannot close a triangle
    #[error("Sides {a}, {b}, {c} violate the triangle inequality")]
    TriangleInequality {
        /// First side.
        a: f64,
        /// Second side.
        b: f64,
        /// Third side.
        c: f64,
    },
}

/// Shape error type
///
/// Represents failures of the lookup and calculation layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// No shape is registered under the given name
    #[error("Shape not found: {name}")]
    UnknownShape {
        /// The name that failed to resolve.
        name: String,
    },

    /// The parameter set failed validation
    #[error("Invalid parameters for {shape}: {source}")]
    InvalidParameters {
        /// Canonical name of the shape.
        shape: &'static str,
        /// The violated constraint.
        #[source]
        source: ParameterError,
    },

    /// The requested metric does not exist for the shape's dimension
    #[error("{metric} is not applicable to {shape} ({dimension})")]
    NotApplicable {
        /// Canonical name of the shape.
        shape: &'static str,
        /// The metric that was requested.
        metric: MetricKind,
        /// The dimension of the shape.
        dimension: Dimension,
    },

    /// The parameters do not determine the perimeter
    #[error("Perimeter of {shape} is not determined by its parameters")]
    PerimeterUndetermined {
        /// Canonical name of the shape.
        shape: &'static str,
    },
}

impl ShapeError {
    /// Check if this is a lookup failure
    pub fn is_unknown_shape(&self) -> bool {
        matches!(self, ShapeError::UnknownShape { .. })
    }

    /// Check if this is a validation failure
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, ShapeError::InvalidParameters { .. })
    }
}

/// Main error type for shapecalc
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Shape lookup or calculation error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a shape error
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Error::Shape(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
