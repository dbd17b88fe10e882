//! Sanitizing raw text fields into an `AgeInput`.
//!
//! Text fields are lenient: blanks and garbage read as 0, and values are
//! clamped into range instead of rejected. Callers that want `validate` to see
//! the raw numbers should build `AgeInput` directly.

use crate::domain::AgeInput;

/// Largest accepted year value (three-digit field).
pub const MAX_YEARS: i32 = 999;

pub const MAX_MONTHS: i32 = 11;

/// Parse the leading integer of a text field.
///
/// Whitespace is trimmed; an optional sign is honored; parsing stops at the
/// first non-digit. Empty or non-numeric text yields 0; digit runs too large
/// for `i32` saturate at `i32::MAX` (or `i32::MIN` when negative).
pub fn parse_field(text: &str) -> i32 {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);

    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }

    // Only ASCII digits remain, so a parse failure means overflow.
    match digits.parse::<i32>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => i32::MIN,
        Err(_) => i32::MAX,
    }
}

pub fn sanitize_years(raw: i32) -> i32 {
    raw.clamp(0, MAX_YEARS)
}

pub fn sanitize_months(raw: i32) -> i32 {
    raw.clamp(0, MAX_MONTHS)
}

impl AgeInput {
    /// Build an age from two text fields, clamping both into range.
    pub fn from_fields(years: &str, months: &str) -> Self {
        Self::sanitized(parse_field(years), parse_field(months))
    }

    /// Clamp already-parsed numbers into range.
    pub fn sanitized(years: i32, months: i32) -> Self {
        Self::new(sanitize_years(years), sanitize_months(months))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_is_lenient() {
        assert_eq!(parse_field(""), 0);
        assert_eq!(parse_field("   "), 0);
        assert_eq!(parse_field("abc"), 0);
        assert_eq!(parse_field(" 12 "), 12);
        assert_eq!(parse_field("7yrs"), 7);
        assert_eq!(parse_field("-3"), -3);
        assert_eq!(parse_field("+4"), 4);
    }

    #[test]
    fn oversized_numbers_saturate_then_clamp() {
        assert_eq!(parse_field("99999999999"), i32::MAX);
        assert_eq!(parse_field("-99999999999"), i32::MIN);
        assert_eq!(AgeInput::from_fields("5000000000", "0"), AgeInput::new(MAX_YEARS, 0));
        assert_eq!(AgeInput::from_fields("0", "5000000000"), AgeInput::new(0, MAX_MONTHS));
        assert_eq!(AgeInput::from_fields("-5000000000", "3"), AgeInput::new(0, 3));
    }

    #[test]
    fn from_fields_clamps() {
        assert_eq!(AgeInput::from_fields("abc", "15"), AgeInput::new(0, 11));
        assert_eq!(AgeInput::from_fields("-2", "-1"), AgeInput::new(0, 0));
        assert_eq!(AgeInput::from_fields("1200", "6"), AgeInput::new(MAX_YEARS, 6));
        assert_eq!(AgeInput::from_fields("3", ""), AgeInput::new(3, 0));
    }
}
