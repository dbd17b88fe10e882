//! Age input validation.
//!
//! Rules are checked in a fixed order and the first match wins. An age past
//! [`WARNING_YEARS`] is still valid; it only carries a warning.

use crate::domain::{AgeInput, ValidationOutcome};

/// Fractional-year age above which results are flagged as unreliable.
pub const WARNING_YEARS: f64 = 30.0;

pub const MSG_EMPTY: &str = "Please enter an age";
pub const MSG_NEGATIVE: &str = "Age cannot be negative";
pub const MSG_MONTHS_RANGE: &str = "Months must be between 0 and 11";
pub const MSG_TOO_OLD: &str = "Age exceeds 30 years, result may be inaccurate";

/// Validate an age before conversion.
pub fn validate(age: AgeInput) -> ValidationOutcome {
    if age.years == 0 && age.months == 0 {
        return ValidationOutcome::invalid(MSG_EMPTY);
    }
    if age.years < 0 || age.months < 0 {
        return ValidationOutcome::invalid(MSG_NEGATIVE);
    }
    if age.months >= 12 {
        return ValidationOutcome::invalid(MSG_MONTHS_RANGE);
    }
    if age.total_years() > WARNING_YEARS {
        return ValidationOutcome::warning(MSG_TOO_OLD);
    }
    ValidationOutcome::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(years: i32, months: i32) -> ValidationOutcome {
        validate(AgeInput::new(years, months))
    }

    #[test]
    fn zero_age_asks_for_input() {
        let out = check(0, 0);
        assert!(!out.is_valid);
        assert!(out.error.as_deref().unwrap().contains("enter an age"));
    }

    #[test]
    fn negatives_are_rejected_before_the_zero_check_can_match() {
        for (years, months) in [(-1, 0), (0, -1), (-1, -1), (3, -2)] {
            let out = check(years, months);
            assert!(!out.is_valid);
            assert_eq!(out.error.as_deref(), Some(MSG_NEGATIVE), "{years}y {months}m");
        }
    }

    #[test]
    fn months_out_of_range() {
        let out = check(0, 12);
        assert!(!out.is_valid);
        assert_eq!(out.error.as_deref(), Some(MSG_MONTHS_RANGE));
        // Negative years win over the month range.
        assert_eq!(check(-1, 12).error.as_deref(), Some(MSG_NEGATIVE));
    }

    #[test]
    fn very_old_ages_warn_but_stay_valid() {
        let out = check(31, 0);
        assert!(out.is_valid);
        assert!(out.is_warning());
        assert_eq!(out.error.as_deref(), Some(MSG_TOO_OLD));

        // Exactly 30 years is not over the threshold; 30y 1m is.
        assert_eq!(check(30, 0), ValidationOutcome::valid());
        assert!(check(30, 1).is_warning());
    }

    #[test]
    fn ordinary_ages_pass_cleanly() {
        let out = check(5, 6);
        assert!(out.is_valid);
        assert_eq!(out.error, None);
        assert!(!out.is_warning());
        assert_eq!(check(0, 1), ValidationOutcome::valid());
    }
}
