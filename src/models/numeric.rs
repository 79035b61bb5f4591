//! Lenient numeric coercion for form input.
//!
//! Field text never gets rejected. Anything that does not read as a finite,
//! non-negative number becomes `0`.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

/// Parses text as a non-negative number, falling back to `0.0`.
///
/// Empty and whitespace-only text read as `0`, like an emptied number input.
#[must_use]
pub fn coerce_number(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Parses text as a whole pixel or column count, flooring fractions.
#[must_use]
pub fn coerce_count(text: &str) -> u32 {
    let value = coerce_number(text).floor();
    if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value as u32
    }
}

/// Formats a pixel amount the way it is written into CSS (`40`, `2.5`).
#[must_use]
pub fn format_px(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number_valid() {
        assert!((coerce_number("40") - 40.0).abs() < f64::EPSILON);
        assert!((coerce_number(" 2.5 ") - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coerce_number_invalid_is_zero() {
        assert!(coerce_number("abc").abs() < f64::EPSILON);
        assert!(coerce_number("").abs() < f64::EPSILON);
        assert!(coerce_number("-").abs() < f64::EPSILON);
        assert!(coerce_number("NaN").abs() < f64::EPSILON);
        assert!(coerce_number("inf").abs() < f64::EPSILON);
        assert!(coerce_number("-12").abs() < f64::EPSILON);
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count("700"), 700);
        assert_eq!(coerce_count("7.9"), 7);
        assert_eq!(coerce_count("x7"), 0);
        assert_eq!(coerce_count("99999999999"), u32::MAX);
    }

    #[test]
    fn test_format_px() {
        assert_eq!(format_px(40.0), "40");
        assert_eq!(format_px(2.5), "2.5");
        assert_eq!(format_px(0.0), "0");
    }
}
