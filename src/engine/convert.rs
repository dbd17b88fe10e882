//! Animal-age to human-age conversion.
//!
//! `convert` evaluates the species table from `engine::tables`, rounds to one
//! decimal and describes the piece of the table that was used. It is total
//! over its input type and never logs or allocates beyond the formula string.

use crate::domain::{AgeInput, AnimalType, CalculationResult, LabelConversion};
use crate::engine::tables::{AgeUnit, DEFAULT_MULTIPLIER, Formula, formula_for};
use crate::math::{AnchorSpan, Segment, anchor_slope, eval_segments, interpolate, round_one_decimal};

/// Convert an animal's age to its human-age equivalent.
///
/// Input is expected to have passed `engine::validate`; results for negative
/// ages are not meaningful.
pub fn convert(animal: AnimalType, age: AgeInput) -> CalculationResult {
    let (raw, formula) = evaluate(formula_for(animal), age);
    CalculationResult {
        human_age: round_one_decimal(raw),
        formula,
        animal_type: animal,
        input_age: age,
    }
}

/// Convert using a free-form species label.
///
/// Labels naming a supported species behave exactly like [`convert`]; any
/// other label is converted with the default multiplier.
pub fn convert_label(label: &str, age: AgeInput) -> LabelConversion {
    match AnimalType::from_label(label) {
        Some(animal) => LabelConversion::Known(convert(animal, age)),
        None => LabelConversion::Fallback {
            label: label.to_string(),
            human_age: round_one_decimal(age.total_years() * DEFAULT_MULTIPLIER),
            formula: format!("default: {} human years per year", fmt_num(DEFAULT_MULTIPLIER)),
            input_age: age,
        },
    }
}

fn evaluate(formula: Formula, age: AgeInput) -> (f64, String) {
    match formula {
        Formula::Segments { unit, segments } => {
            let x = measure(unit, age);
            match eval_segments(segments, x) {
                Some((idx, value)) => (value, describe_segment(unit, segments, idx)),
                None => default_formula(age),
            }
        }
        Formula::Anchors { unit, anchors } => {
            let x = measure(unit, age);
            let Some((span, value)) = interpolate(anchors, x) else {
                return default_formula(age);
            };
            let sfx = unit.suffix();
            let text = match span {
                AnchorSpan::Between(i) => {
                    let (a, b) = (anchors[i], anchors[i + 1]);
                    format!(
                        "interpolated between {}{sfx} ({}) and {}{sfx} ({})",
                        fmt_num(a.x),
                        fmt_num(a.y),
                        fmt_num(b.x),
                        fmt_num(b.y)
                    )
                }
                AnchorSpan::Beyond => {
                    let n = anchors.len();
                    let (a, b) = (anchors[n - 2], anchors[n - 1]);
                    format!(
                        "{} + {} per {} beyond {}{sfx}",
                        fmt_num(b.y),
                        fmt_num(anchor_slope(a, b)),
                        unit.noun(),
                        fmt_num(b.x)
                    )
                }
            };
            (value, text)
        }
        Formula::Lifespan {
            human_lifespan,
            animal_lifespan,
        } => {
            let ratio = human_lifespan / animal_lifespan;
            let text = format!(
                "{} human years per year (average lifespan {}y human / {}y animal)",
                fmt_num(ratio),
                fmt_num(human_lifespan),
                fmt_num(animal_lifespan)
            );
            (age.total_years() * ratio, text)
        }
    }
}

fn measure(unit: AgeUnit, age: AgeInput) -> f64 {
    match unit {
        AgeUnit::Years => age.total_years(),
        AgeUnit::Months => age.total_months(),
    }
}

fn default_formula(age: AgeInput) -> (f64, String) {
    (
        age.total_years() * DEFAULT_MULTIPLIER,
        format!("default: {} human years per year", fmt_num(DEFAULT_MULTIPLIER)),
    )
}

/// e.g. `segment 2/3: 15 + 9 per year from 1y to 2y`.
fn describe_segment(unit: AgeUnit, segments: &[Segment], idx: usize) -> String {
    let s = segments[idx];
    let sfx = unit.suffix();
    let noun = unit.noun();
    let body = if s.is_tail() {
        format!(
            "{} + {} per {noun} beyond {}{sfx}",
            fmt_num(s.base),
            fmt_num(s.slope),
            fmt_num(s.start)
        )
    } else if idx == 0 && s.base == 0.0 {
        format!(
            "{} human years per {noun} up to {}{sfx}",
            fmt_num(s.slope),
            fmt_num(s.upper)
        )
    } else {
        format!(
            "{} + {} per {noun} from {}{sfx} to {}{sfx}",
            fmt_num(s.base),
            fmt_num(s.slope),
            fmt_num(s.start),
            fmt_num(s.upper)
        )
    };
    format!("segment {}/{}: {body}", idx + 1, segments.len())
}

/// `15.0 -> "15"`, `0.5 -> "0.5"`.
fn fmt_num(v: f64) -> String {
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human(animal: AnimalType, years: i32, months: i32) -> f64 {
        convert(animal, AgeInput::new(years, months)).human_age
    }

    #[test]
    fn zero_age_is_zero_for_every_species() {
        for animal in AnimalType::ALL {
            assert_eq!(human(animal, 0, 0), 0.0, "{animal}");
        }
    }

    #[test]
    fn dog_and_cat_breakpoints() {
        for animal in [AnimalType::Dog, AnimalType::Cat] {
            assert_eq!(human(animal, 1, 0), 15.0);
            assert_eq!(human(animal, 2, 0), 24.0);
        }
        assert_eq!(human(AnimalType::Dog, 1, 6), 19.5);
        assert_eq!(human(AnimalType::Dog, 5, 0), 39.0);
        assert_eq!(human(AnimalType::Cat, 5, 0), 36.0);
        assert_eq!(human(AnimalType::Cat, 5, 6), 38.0);
    }

    #[test]
    fn fractional_months_are_rounded() {
        // 7/12 * 15 = 8.75 -> 8.8
        assert_eq!(human(AnimalType::Dog, 0, 7), 8.8);
        // 2 + 1/12 years: 24 + 5/12 = 24.4166.. -> 24.4
        assert_eq!(human(AnimalType::Dog, 2, 1), 24.4);
    }

    #[test]
    fn rabbit_is_month_based() {
        assert_eq!(human(AnimalType::Rabbit, 0, 2), 6.0);
        assert_eq!(human(AnimalType::Rabbit, 0, 4), 12.0);
        assert_eq!(human(AnimalType::Rabbit, 0, 8), 16.0);
        assert_eq!(human(AnimalType::Rabbit, 1, 0), 20.0);
        assert_eq!(human(AnimalType::Rabbit, 2, 0), 26.0);
    }

    #[test]
    fn hamster_anchors_and_extrapolation() {
        assert_eq!(human(AnimalType::Hamster, 0, 1), 14.0);
        assert_eq!(human(AnimalType::Hamster, 0, 3), 23.0);
        assert_eq!(human(AnimalType::Hamster, 0, 9), 46.0);
        assert_eq!(human(AnimalType::Hamster, 1, 0), 58.0);
        assert_eq!(human(AnimalType::Hamster, 2, 0), 70.0);
        assert_eq!(human(AnimalType::Hamster, 3, 0), 82.0);
    }

    #[test]
    fn bird_uses_lifespan_ratio() {
        assert_eq!(human(AnimalType::Bird, 1, 0), 8.0);
        assert_eq!(human(AnimalType::Bird, 2, 6), 20.0);
    }

    #[test]
    fn monotonic_in_years() {
        for animal in AnimalType::ALL {
            let mut prev = 0.0;
            for years in 0..=40 {
                let y = human(animal, years, 0);
                assert!(y >= prev, "{animal} decreased at {years}y: {prev} -> {y}");
                prev = y;
            }
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        for animal in AnimalType::ALL {
            let age = AgeInput::new(3, 7);
            let a = convert(animal, age);
            let b = convert(animal, age);
            assert_eq!(a.human_age.to_bits(), b.human_age.to_bits());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn formula_names_the_active_segment() {
        let first = convert(AnimalType::Dog, AgeInput::new(0, 6));
        assert_eq!(first.formula, "segment 1/3: 15 human years per year up to 1y");

        let second = convert(AnimalType::Cat, AgeInput::new(1, 0));
        assert_eq!(second.formula, "segment 1/3: 15 human years per year up to 1y");

        let tail = convert(AnimalType::Cat, AgeInput::new(4, 0));
        assert_eq!(tail.formula, "segment 3/3: 24 + 4 per year beyond 2y");

        let rabbit = convert(AnimalType::Rabbit, AgeInput::new(0, 10));
        assert_eq!(rabbit.formula, "segment 2/3: 12 + 1 per month from 4mo to 12mo");
    }

    #[test]
    fn hamster_formula_text() {
        let between = convert(AnimalType::Hamster, AgeInput::new(0, 9));
        assert_eq!(between.formula, "interpolated between 6mo (34) and 12mo (58)");

        let beyond = convert(AnimalType::Hamster, AgeInput::new(3, 0));
        assert_eq!(beyond.formula, "70 + 1 per month beyond 24mo");
    }

    #[test]
    fn result_echoes_inputs() {
        let age = AgeInput::new(4, 2);
        let result = convert(AnimalType::Bird, age);
        assert_eq!(result.animal_type, AnimalType::Bird);
        assert_eq!(result.input_age, age);
        assert!(result.formula.starts_with("8 human years per year"));
    }

    #[test]
    fn unknown_label_uses_default_multiplier() {
        let conv = convert_label("Ferret", AgeInput::new(2, 0));
        assert_eq!(conv.human_age(), 14.0);
        assert_eq!(conv.formula(), "default: 7 human years per year");
        assert_eq!(conv.species_name(), "Ferret");
        assert!(matches!(conv, LabelConversion::Fallback { .. }));
    }

    #[test]
    fn known_label_matches_typed_conversion() {
        let age = AgeInput::new(6, 3);
        let conv = convert_label(" DOG ", age);
        assert_eq!(conv, LabelConversion::Known(convert(AnimalType::Dog, age)));
    }
}
