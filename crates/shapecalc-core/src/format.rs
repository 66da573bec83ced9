//! Number formatting for results.
//!
//! Results are shown in the general `%g` style: a fixed number of
//! significant digits, trailing zeros stripped, and scientific notation
//! for very large or very small magnitudes.

use serde::{Deserialize, Serialize};

/// Default number of significant digits
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// Largest precision an `f64` can meaningfully show
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// `%g`-style number formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub significant_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl NumberFormat {
    /// Precision is clamped to `1..=MAX_SIGNIFICANT_DIGITS`.
    pub fn new(significant_digits: usize) -> Self {
        Self {
            significant_digits: significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS),
        }
    }

    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "nan".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_string();
        }
        if value == 0.0 {
            return "0".to_string();
        }

        let precision = self.significant_digits.max(1);

        // Rounding to the requested precision can bump the exponent
        // (9.9999996 -> 1e1), so read it back from the rounded form.
        let scientific = format!("{:.*e}", precision - 1, value);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (scientific.as_str(), 0),
        };

        if exponent < -4 || exponent >= precision as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!(
                "{}e{}{:02}",
                strip_trailing_zeros(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
            strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
        }
    }
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
