//! Parameter sets.
//!
//! Measurements arrive as text from up to five input fields. Empty fields
//! are skipped; text that is not a number becomes `NaN` so that shape
//! validation rejects it.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use tracing::warn;

/// Number of input fields a form offers
pub const MAX_FIELDS: usize = 5;

/// Ordered measurements supplied for one calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(Vec<f64>);

impl ParameterSet {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Build a set from raw field text.
    ///
    /// Only the first [`MAX_FIELDS`] fields are read.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        let values = fields
            .iter()
            .take(MAX_FIELDS)
            .map(|field| field.as_ref().trim())
            .filter(|text| !text.is_empty())
            .map(parse_field)
            .collect();
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

fn parse_field(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or_else(|e| {
        warn!(field = text, error = %e, "unparseable measurement");
        f64::NAN
    })
}

impl Deref for ParameterSet {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for ParameterSet {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for ParameterSet {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
