//! Locale-independent number formatting for attribute values.

/// Formats a number for use in an attribute or path command.
///
/// Values are rounded to three decimal places, trailing zeros (and a trailing
/// decimal point) are removed, and negative zero prints as `0`. The output
/// never depends on the process locale.
///
/// # Examples
///
/// ```
/// # use gyre_core::format_number;
/// assert_eq!(format_number(150.0), "150");
/// assert_eq!(format_number(-300.0), "-300");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1.0 / 3.0), "0.333");
/// ```
pub fn format_number(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(40.0), "40");
        assert_eq!(format_number(-7.0), "-7");
    }

    #[test]
    fn test_fraction_is_rounded_and_trimmed() {
        assert_eq!(format_number(13.333_333_333), "13.333");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(2.25), "2.25");
        assert_eq!(format_number(9.9999), "10");
    }

    #[test]
    fn test_negative_zero_and_tiny_values() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(1.2246e-15), "0");
    }
}
