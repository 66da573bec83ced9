//! # shapecalc core
//!
//! Shape catalog, name registry and calculation dispatch.
//! Provides the eleven supported shape kinds with their parameter schemas,
//! validity rules and formulas, plus a headless form model that front ends
//! drive.

pub mod calculator;
pub mod error;
pub mod form;
pub mod format;
pub mod parameters;
pub mod registry;
pub mod shape;

pub use calculator::{
    calculate, calculate_by_name, render_error, render_outcome, Action, Calculation,
    INVALID_PARAMETERS, SHAPE_NOT_FOUND,
};
pub use error::{Error, ParameterError, Result, ShapeError};
pub use form::{FieldSlot, FormLayout, ShapeForm};
pub use format::NumberFormat;
pub use parameters::{ParameterSet, MAX_FIELDS};
pub use registry::{recognized_names, select_canonical, select_shape, LEGACY_ALIASES};
pub use shape::{Dimension, MetricKind, ShapeDescriptor, ShapeKind};
