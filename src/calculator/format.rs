//! Number formatting for the calculator display.
//!
//! Every value shown on the display goes through [`format_display`], and
//! every operand read back from it goes through [`parse_display`].

/// Literal shown for any non-finite result (division by zero, NaN operands).
pub const ERROR_DISPLAY: &str = "Error";

/// Magnitudes at or above this render in exponent form.
const SCIENTIFIC_UPPER: f64 = 1e21;
/// Non-zero magnitudes below this render in exponent form.
const SCIENTIFIC_LOWER: f64 = 1e-6;

/// Format a number for the display.
///
/// - non-finite values become `"Error"`
/// - negative zero becomes `"0"`
/// - very large or very small magnitudes use exponent notation (`1e+21`)
/// - fractions keep at most 10 decimals, with trailing zeros stripped
/// - integral values have no decimal point
pub fn format_display(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_UPPER || magnitude < SCIENTIFIC_LOWER {
        return format_scientific(value);
    }

    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        let formatted = format!("{:.10}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Shortest round-trip mantissa with an explicitly signed exponent.
fn format_scientific(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Read the display back as a number.
///
/// Anything that is not a decimal literal (the `"Error"` sentinel) reads as
/// NaN, so an error keeps propagating through later arithmetic.
pub fn parse_display(display: &str) -> f64 {
    display.parse::<f64>().unwrap_or(f64::NAN)
}
