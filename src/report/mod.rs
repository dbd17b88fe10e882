//! Reporting utilities: age charts and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{AgeInput, AnimalType};
use crate::engine::convert;

/// One row of a species age chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRow {
    pub years: u32,
    pub human_age: f64,
}

/// Human-age equivalents for whole years `0..=max_years`.
pub fn age_chart(animal: AnimalType, max_years: u32) -> Vec<ChartRow> {
    (0..=max_years)
        .map(|years| {
            // Chart lengths are bounded by config; saturate rather than wrap.
            let age = AgeInput::new(i32::try_from(years).unwrap_or(i32::MAX), 0);
            ChartRow {
                years,
                human_age: convert(animal, age).human_age,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_includes_both_ends() {
        let rows = age_chart(AnimalType::Dog, 3);
        let ages: Vec<f64> = rows.iter().map(|r| r.human_age).collect();
        assert_eq!(ages, vec![0.0, 15.0, 24.0, 29.0]);
        assert_eq!(rows[3].years, 3);
    }

    #[test]
    fn chart_is_non_decreasing() {
        for animal in AnimalType::ALL {
            let rows = age_chart(animal, 20);
            assert!(rows.windows(2).all(|w| w[0].human_age <= w[1].human_age), "{animal}");
        }
    }
}
