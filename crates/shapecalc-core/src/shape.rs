//! Shape catalog.
//!
//! Every supported figure is a variant of [`ShapeKind`]. A kind carries no
//! instance data: its parameter schema lives in a static [`ShapeDescriptor`]
//! and its formulas take the caller's measurements at call time.
//!
//! Metric functions are gated on [`Dimension`]. Asking a solid for its area
//! or a planar shape for its volume returns [`ShapeError::NotApplicable`],
//! so callers should pick the metric from [`ShapeKind::dimension`] first.

use crate::error::{ParameterError, ShapeError};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Dimensionality of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Flat figure with area and perimeter
    #[serde(rename = "2D")]
    Planar,
    /// Solid with volume
    #[serde(rename = "3D")]
    Solid,
}

impl Dimension {
    /// Numeric dimension (2 or 3)
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Planar => 2,
            Self::Solid => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.as_u8())
    }
}

/// A single geometric measurement a shape can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Area,
    Perimeter,
    Volume,
}

impl MetricKind {
    /// Dimension the metric is defined for
    pub fn dimension(self) -> Dimension {
        match self {
            Self::Area | Self::Perimeter => Dimension::Planar,
            Self::Volume => Dimension::Solid,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Area => write!(f, "Area"),
            Self::Perimeter => write!(f, "Perimeter"),
            Self::Volume => write!(f, "Volume"),
        }
    }
}

/// Supported shape kinds, in the order they are offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Square,
    Rectangle,
    Circle,
    /// Triangle given by base and height
    TriangleBaseHeight,
    /// Triangle given by its three side lengths
    TriangleThreeSides,
    Trapezoid,
    Sphere,
    Cube,
    RectangularPrism,
    Cylinder,
    Cone,
}

/// Static description of a shape kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeDescriptor {
    /// The kind this descriptor belongs to
    pub kind: ShapeKind,
    /// Canonical registry name
    pub name: &'static str,
    /// Human-readable label
    pub display_name: &'static str,
    /// Planar or solid
    pub dimension: Dimension,
    /// Ordered parameter labels; the length is the shape's arity
    pub parameter_names: &'static [&'static str],
}

// Indexed by `ShapeKind as usize`.
static CATALOG: [ShapeDescriptor; 11] = [
    ShapeDescriptor {
        kind: ShapeKind::Square,
        name: "Square",
        display_name: "Square",
        dimension: Dimension::Planar,
        parameter_names: &["Side Length"],
    },
    ShapeDescriptor {
        kind: ShapeKind::Rectangle,
        name: "Rectangle",
        display_name: "Rectangle",
        dimension: Dimension::Planar,
        parameter_names: &["Length", "Width"],
    },
    ShapeDescriptor {
        kind: ShapeKind::Circle,
        name: "Circle",
        display_name: "Circle",
        dimension: Dimension::Planar,
        parameter_names: &["Radius"],
    },
    ShapeDescriptor {
        kind: ShapeKind::TriangleBaseHeight,
        name: "TriangleBaseHeight",
        display_name: "Triangle / Base + Height",
        dimension: Dimension::Planar,
        parameter_names: &["Base", "Height"],
    },
    ShapeDescriptor {
        kind: ShapeKind::TriangleThreeSides,
        name: "TriangleThreeSides",
        display_name: "Triangle / 3 Sides",
        dimension: Dimension::Planar,
        parameter_names: &["Side A", "Side B", "Side C"],
    },
    ShapeDescriptor {
        kind: ShapeKind::Trapezoid,
        name: "Trapezoid",
        display_name: "Trapezoid",
        dimension: Dimension::Planar,
        parameter_names: &["Base1", "Base2", "Height", "Side1", "Side2"],
    },
    ShapeDescriptor {
        kind: ShapeKind::Sphere,
        name: "Sphere",
        display_name: "Sphere",
        dimension: Dimension::Solid,
        parameter_names: &["Radius"],
    },
    ShapeDescriptor {
        kind: ShapeKind::Cube,
        name: "Cube",
        display_name: "Cube",
        dimension: Dimension::Solid,
        parameter_names: &["Side Length"],
    },
    ShapeDescriptor {
        kind: ShapeKind::RectangularPrism,
        name: "RectangularPrism",
        display_name: "Rectangular Prism",
        dimension: Dimension::Solid,
        parameter_names: &["Length", "Width", "Height"],
    },
    ShapeDescriptor {
        kind: ShapeKind::Cylinder,
        name: "Cylinder",
        display_name: "Cylinder",
        dimension: Dimension::Solid,
        parameter_names: &["Radius", "Height"],
    },
    ShapeDescriptor {
        kind: ShapeKind::Cone,
        name: "Cone",
        display_name: "Cone",
        dimension: Dimension::Solid,
        parameter_names: &["Radius", "Height"],
    },
];

impl ShapeKind {
    /// Every kind, in selection-list order
    pub const ALL: [ShapeKind; 11] = [
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::TriangleBaseHeight,
        ShapeKind::TriangleThreeSides,
        ShapeKind::Trapezoid,
        ShapeKind::Sphere,
        ShapeKind::Cube,
        ShapeKind::RectangularPrism,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
    ];

    /// Static descriptor for this kind
    pub fn descriptor(self) -> &'static ShapeDescriptor {
        &CATALOG[self as usize]
    }

    /// Canonical registry name
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }

    pub fn dimension(self) -> Dimension {
        self.descriptor().dimension
    }

    /// Ordered parameter labels
    pub fn parameter_names(self) -> &'static [&'static str] {
        self.descriptor().parameter_names
    }

    /// Number of measurements the shape requires
    pub fn arity(self) -> usize {
        self.parameter_names().len()
    }

    /// Metrics this kind can compute
    pub fn metrics(self) -> &'static [MetricKind] {
        match self.dimension() {
            Dimension::Planar => &[MetricKind::Area, MetricKind::Perimeter],
            Dimension::Solid => &[MetricKind::Volume],
        }
    }

    /// Returns true iff `parameters` has the right length and satisfies
    /// every constraint of this kind.
    pub fn is_valid(self, parameters: &[f64]) -> bool {
        self.validate(parameters).is_ok()
    }

    /// Checks `parameters` and reports the first violated constraint.
    ///
    /// All measurements must be finite and strictly positive. Three-sided
    /// triangles must also satisfy the strict triangle inequality.
    pub fn validate(self, parameters: &[f64]) -> Result<(), ParameterError> {
        let names = self.parameter_names();
        if parameters.len() != names.len() {
            return Err(ParameterError::WrongArity {
                expected: names.len(),
                actual: parameters.len(),
            });
        }

        for (&name, &value) in names.iter().zip(parameters) {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParameterError::NonPositive { name, value });
            }
        }

        if let (ShapeKind::TriangleThreeSides, &[a, b, c]) = (self, parameters) {
            if !(a + b > c && a + c > b && b + c > a) {
                return Err(ParameterError::TriangleInequality { a, b, c });
            }
        }

        Ok(())
    }

    /// Area of a planar shape.
    ///
    /// Fails with `NotApplicable` for solids and `InvalidParameters` when
    /// `parameters` does not validate.
    pub fn area(self, parameters: &[f64]) -> Result<f64, ShapeError> {
        let p = self.checked(MetricKind::Area, parameters)?;
        let area = match (self, p) {
            (ShapeKind::Square, &[side]) => side * side,
            (ShapeKind::Rectangle, &[length, width]) => length * width,
            (ShapeKind::Circle, &[radius]) => PI * radius * radius,
            (ShapeKind::TriangleBaseHeight, &[base, height]) => 0.5 * base * height,
            (ShapeKind::TriangleThreeSides, &[a, b, c]) => heron(a, b, c),
            (ShapeKind::Trapezoid, &[base1, base2, height, _, _]) => 0.5 * (base1 + base2) * height,
            _ => return Err(self.not_applicable(MetricKind::Area)),
        };
        Ok(area)
    }

    /// Perimeter of a planar shape.
    ///
    /// A triangle given only by base and height has no determined perimeter
    /// and yields `PerimeterUndetermined`.
    pub fn perimeter(self, parameters: &[f64]) -> Result<f64, ShapeError> {
        let p = self.checked(MetricKind::Perimeter, parameters)?;
        let perimeter = match (self, p) {
            (ShapeKind::Square, &[side]) => 4.0 * side,
            (ShapeKind::Rectangle, &[length, width]) => 2.0 * (length + width),
            (ShapeKind::Circle, &[radius]) => 2.0 * PI * radius,
            (ShapeKind::TriangleBaseHeight, _) => {
                return Err(ShapeError::PerimeterUndetermined { shape: self.name() })
            }
            (ShapeKind::TriangleThreeSides, &[a, b, c]) => a + b + c,
            (ShapeKind::Trapezoid, &[base1, base2, _, side1, side2]) => {
                base1 + base2 + side1 + side2
            }
            _ => return Err(self.not_applicable(MetricKind::Perimeter)),
        };
        Ok(perimeter)
    }

    /// Volume of a solid.
    ///
    /// Fails with `NotApplicable` for planar shapes.
    pub fn volume(self, parameters: &[f64]) -> Result<f64, ShapeError> {
        let p = self.checked(MetricKind::Volume, parameters)?;
        let volume = match (self, p) {
            (ShapeKind::Sphere, &[radius]) => 4.0 / 3.0 * PI * radius.powi(3),
            (ShapeKind::Cube, &[side]) => side.powi(3),
            (ShapeKind::RectangularPrism, &[length, width, height]) => length * width * height,
            (ShapeKind::Cylinder, &[radius, height]) => PI * radius * radius * height,
            (ShapeKind::Cone, &[radius, height]) => PI * radius * radius * height / 3.0,
            _ => return Err(self.not_applicable(MetricKind::Volume)),
        };
        Ok(volume)
    }

    /// Compute a single metric by kind
    pub fn metric(self, metric: MetricKind, parameters: &[f64]) -> Result<f64, ShapeError> {
        match metric {
            MetricKind::Area => self.area(parameters),
            MetricKind::Perimeter => self.perimeter(parameters),
            MetricKind::Volume => self.volume(parameters),
        }
    }

    fn checked(self, metric: MetricKind, parameters: &[f64]) -> Result<&[f64], ShapeError> {
        if metric.dimension() != self.dimension() {
            return Err(self.not_applicable(metric));
        }
        self.validate(parameters)
            .map_err(|source| ShapeError::InvalidParameters {
                shape: self.name(),
                source,
            })?;
        Ok(parameters)
    }

    fn not_applicable(self, metric: MetricKind) -> ShapeError {
        ShapeError::NotApplicable {
            shape: self.name(),
            metric,
            dimension: self.dimension(),
        }
    }
}

/// Heron's formula. Sides must already satisfy the triangle inequality.
fn heron(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::registry::select_shape(s).ok_or_else(|| ShapeError::UnknownShape {
            name: s.to_string(),
        })
    }
}
