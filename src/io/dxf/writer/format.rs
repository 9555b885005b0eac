//! Numeric formatting for value lines

use crate::error::Result;
use crate::types::{convert_value, Unit, UnitSystem};

/// Default number of significant digits, as with C's `%g`
pub const DEFAULT_PRECISION: usize = 6;

/// Format a float the way C's `%g` does.
///
/// With `Some(p)` the value is rounded to `p` significant digits (at least
/// one), written in fixed notation when the decimal exponent lies in
/// `-4..p` and in exponent notation otherwise, with trailing zeros removed.
/// With `None` the shortest text that reads back to the same value is used.
/// Negative zero is written as `0`.
pub fn format_general(value: f64, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let value = if value == 0.0 { 0.0 } else { value };

    let Some(precision) = precision else {
        return value.to_string();
    };
    let precision = precision.max(1);

    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Render a value line for a length: convert it from `unit` into `units`,
/// then format it. Untagged values are formatted as given.
pub fn format_value(
    value: f64,
    unit: Option<Unit>,
    units: UnitSystem,
    precision: Option<usize>,
) -> Result<String> {
    let converted = convert_value(value, unit, units)?;
    Ok(format_general(converted, precision))
}
