//! Calculation dispatch.
//!
//! Ties the registry and the catalog together: resolve a name, validate the
//! measurements, compute the metrics the requested action asks for, and
//! render the outcome as display text.

use crate::error::ShapeError;
use crate::format::NumberFormat;
use crate::registry::select_shape;
use crate::shape::{Dimension, MetricKind, ShapeKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Shown when the name does not resolve
pub const SHAPE_NOT_FOUND: &str = "Shape not found";
/// Shown when validation rejects the measurements
pub const INVALID_PARAMETERS: &str = "Invalid parameters";

/// What the user asked to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Area and perimeter of a planar shape
    AreaPerimeter,
    /// Volume of a solid
    Volume,
}

impl Action {
    /// The action that applies to shapes of `dimension`
    pub fn for_dimension(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Planar => Self::AreaPerimeter,
            Dimension::Solid => Self::Volume,
        }
    }

    pub fn dimension(self) -> Dimension {
        match self {
            Self::AreaPerimeter => Dimension::Planar,
            Self::Volume => Dimension::Solid,
        }
    }

    fn primary_metric(self) -> MetricKind {
        match self {
            Self::AreaPerimeter => MetricKind::Area,
            Self::Volume => MetricKind::Volume,
        }
    }
}

/// Computed metrics for one request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "dimension")]
pub enum Calculation {
    #[serde(rename = "2D")]
    Planar {
        shape: ShapeKind,
        area: f64,
        /// `None` when the measurements do not determine the perimeter
        perimeter: Option<f64>,
    },
    #[serde(rename = "3D")]
    Solid { shape: ShapeKind, volume: f64 },
}

impl Calculation {
    pub fn shape(&self) -> ShapeKind {
        match self {
            Self::Planar { shape, .. } | Self::Solid { shape, .. } => *shape,
        }
    }

    /// Display text, e.g. `"Area: 16\nPerimeter: 16"` or `"Volume: 27"`
    pub fn render(&self, format: &NumberFormat) -> String {
        match self {
            Self::Planar {
                area, perimeter, ..
            } => {
                let perimeter = perimeter
                    .map(|p| format.format(p))
                    .unwrap_or_else(|| "n/a".to_string());
                format!("Area: {}\nPerimeter: {}", format.format(*area), perimeter)
            }
            Self::Solid { volume, .. } => format!("Volume: {}", format.format(*volume)),
        }
    }
}

/// Run `action` for `kind` over `parameters`.
pub fn calculate(
    kind: ShapeKind,
    parameters: &[f64],
    action: Action,
) -> Result<Calculation, ShapeError> {
    debug!(shape = kind.name(), ?action, ?parameters, "calculate");

    if action.dimension() != kind.dimension() {
        return Err(ShapeError::NotApplicable {
            shape: kind.name(),
            metric: action.primary_metric(),
            dimension: kind.dimension(),
        });
    }

    kind.validate(parameters)
        .map_err(|source| ShapeError::InvalidParameters {
            shape: kind.name(),
            source,
        })?;

    let calculation = match action {
        Action::AreaPerimeter => {
            let area = kind.area(parameters)?;
            let perimeter = match kind.perimeter(parameters) {
                Ok(p) => Some(p),
                Err(ShapeError::PerimeterUndetermined { .. }) => None,
                Err(e) => return Err(e),
            };
            Calculation::Planar {
                shape: kind,
                area,
                perimeter,
            }
        }
        Action::Volume => Calculation::Solid {
            shape: kind,
            volume: kind.volume(parameters)?,
        },
    };
    Ok(calculation)
}

/// Resolve `name` through the registry, then [`calculate`].
pub fn calculate_by_name(
    name: &str,
    parameters: &[f64],
    action: Action,
) -> Result<Calculation, ShapeError> {
    let kind = select_shape(name).ok_or_else(|| ShapeError::UnknownShape {
        name: name.to_string(),
    })?;
    calculate(kind, parameters, action)
}

/// Display text for a failed calculation
pub fn render_error(error: &ShapeError) -> String {
    match error {
        ShapeError::UnknownShape { .. } => SHAPE_NOT_FOUND.to_string(),
        ShapeError::InvalidParameters { .. } => INVALID_PARAMETERS.to_string(),
        ShapeError::NotApplicable { dimension, .. } => {
            format!("Not applicable for {} shapes", dimension)
        }
        ShapeError::PerimeterUndetermined { .. } => error.to_string(),
    }
}

/// Display text for either outcome
pub fn render_outcome(outcome: &Result<Calculation, ShapeError>, format: &NumberFormat) -> String {
    match outcome {
        Ok(calculation) => calculation.render(format),
        Err(error) => render_error(error),
    }
}
