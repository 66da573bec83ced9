//! Shape registry.
//!
//! Resolves the name chosen by the user to a [`ShapeKind`]. Matching is
//! exact and case-sensitive. Besides the canonical names, the registry
//! accepts the older `Triangle2` / `Triangle3` spellings for the two
//! triangle variants.

use crate::shape::ShapeKind;
use tracing::debug;

/// Older names still accepted for compatibility, with their kinds
pub const LEGACY_ALIASES: [(&str, ShapeKind); 2] = [
    ("Triangle2", ShapeKind::TriangleBaseHeight),
    ("Triangle3", ShapeKind::TriangleThreeSides),
];

/// Look up a shape by name, accepting canonical names and legacy aliases.
///
/// Returns `None` for anything unrecognized.
pub fn select_shape(name: &str) -> Option<ShapeKind> {
    let kind = select_canonical(name).or_else(|| {
        LEGACY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|&(_, kind)| kind)
    });
    debug!(name, ?kind, "shape lookup");
    kind
}

/// Look up a shape by canonical name only.
pub fn select_canonical(name: &str) -> Option<ShapeKind> {
    match name {
        "Square" => Some(ShapeKind::Square),
        "Rectangle" => Some(ShapeKind::Rectangle),
        "Circle" => Some(ShapeKind::Circle),
        "TriangleBaseHeight" => Some(ShapeKind::TriangleBaseHeight),
        "TriangleThreeSides" => Some(ShapeKind::TriangleThreeSides),
        "Trapezoid" => Some(ShapeKind::Trapezoid),
        "Sphere" => Some(ShapeKind::Sphere),
        "Cube" => Some(ShapeKind::Cube),
        "RectangularPrism" => Some(ShapeKind::RectangularPrism),
        "Cylinder" => Some(ShapeKind::Cylinder),
        "Cone" => Some(ShapeKind::Cone),
        _ => None,
    }
}

/// Every name the registry accepts: canonical names first, then aliases.
pub fn recognized_names() -> Vec<&'static str> {
    ShapeKind::ALL
        .iter()
        .map(|kind| kind.name())
        .chain(LEGACY_ALIASES.iter().map(|(alias, _)| *alias))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(select_canonical(kind.name()), Some(kind));
            assert_eq!(select_shape(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(select_shape("Triangle2"), Some(ShapeKind::TriangleBaseHeight));
        assert_eq!(select_shape("Triangle3"), Some(ShapeKind::TriangleThreeSides));
        assert_eq!(select_canonical("Triangle2"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(select_shape("square"), None);
        assert_eq!(select_shape("CONE"), None);
        assert_eq!(select_shape(" Cone"), None);
        assert_eq!(select_shape(""), None);
    }

    #[test]
    fn test_recognized_names() {
        let names = recognized_names();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "Square");
        assert!(names.contains(&"Triangle3"));
    }
}
