//! Per-species formula tables.
//!
//! Dog, cat and rabbit are segment tables, hamster is an anchor curve and bird
//! is a fixed ratio of average lifespans. The formula text shown to users is
//! generated from these same tables (see `engine::convert`).

use crate::domain::AnimalType;
use crate::math::{Anchor, Segment};

/// Which age measure a table is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeUnit {
    /// `years + months / 12`.
    Years,
    /// `years * 12 + months`.
    Months,
}

impl AgeUnit {
    pub fn noun(self) -> &'static str {
        match self {
            AgeUnit::Years => "year",
            AgeUnit::Months => "month",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            AgeUnit::Years => "y",
            AgeUnit::Months => "mo",
        }
    }
}

/// A species' conversion formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formula {
    Segments {
        unit: AgeUnit,
        segments: &'static [Segment],
    },
    Anchors {
        unit: AgeUnit,
        anchors: &'static [Anchor],
    },
    /// `total_years * human_lifespan / animal_lifespan`.
    Lifespan {
        human_lifespan: f64,
        animal_lifespan: f64,
    },
}

pub const DOG_SEGMENTS: [Segment; 3] = [
    Segment::new(0.0, 1.0, 0.0, 15.0),
    Segment::new(1.0, 2.0, 15.0, 9.0),
    Segment::new(2.0, f64::INFINITY, 24.0, 5.0),
];

pub const CAT_SEGMENTS: [Segment; 3] = [
    Segment::new(0.0, 1.0, 0.0, 15.0),
    Segment::new(1.0, 2.0, 15.0, 9.0),
    Segment::new(2.0, f64::INFINITY, 24.0, 4.0),
];

pub const RABBIT_SEGMENTS: [Segment; 3] = [
    Segment::new(0.0, 4.0, 0.0, 3.0),
    Segment::new(4.0, 12.0, 12.0, 1.0),
    Segment::new(12.0, f64::INFINITY, 20.0, 0.5),
];

/// `(age in months, human age)`.
pub const HAMSTER_ANCHORS: [Anchor; 7] = [
    Anchor::new(0.0, 0.0),
    Anchor::new(1.0, 14.0),
    Anchor::new(2.0, 20.0),
    Anchor::new(4.0, 26.0),
    Anchor::new(6.0, 34.0),
    Anchor::new(12.0, 58.0),
    Anchor::new(24.0, 70.0),
];

pub const HUMAN_AVERAGE_LIFESPAN_YEARS: f64 = 80.0;

/// Placeholder shared by every bird species.
pub const BIRD_AVERAGE_LIFESPAN_YEARS: f64 = 10.0;

/// Human years per year for species without a table.
pub const DEFAULT_MULTIPLIER: f64 = 7.0;

/// Formula table for a species.
pub fn formula_for(animal: AnimalType) -> Formula {
    match animal {
        AnimalType::Dog => Formula::Segments {
            unit: AgeUnit::Years,
            segments: &DOG_SEGMENTS,
        },
        AnimalType::Cat => Formula::Segments {
            unit: AgeUnit::Years,
            segments: &CAT_SEGMENTS,
        },
        AnimalType::Rabbit => Formula::Segments {
            unit: AgeUnit::Months,
            segments: &RABBIT_SEGMENTS,
        },
        AnimalType::Hamster => Formula::Anchors {
            unit: AgeUnit::Months,
            anchors: &HAMSTER_ANCHORS,
        },
        AnimalType::Bird => Formula::Lifespan {
            human_lifespan: HUMAN_AVERAGE_LIFESPAN_YEARS,
            animal_lifespan: BIRD_AVERAGE_LIFESPAN_YEARS,
        },
    }
}
