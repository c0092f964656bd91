use serde::{Deserialize, Serialize};
use crate::config::calculator_input::CalculatorInput;

/// A known (year, emissions) point on the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionAnchor {
    pub year: i32,
    pub value: f64,  // MtCO2e
}

impl EmissionAnchor {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Initial, peak and target anchors of a two-segment trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionAnchors {
    pub initial: EmissionAnchor,
    pub peak: EmissionAnchor,
    pub target: EmissionAnchor,
}

impl EmissionAnchors {
    pub fn from_input(input: &CalculatorInput) -> Self {
        Self {
            initial: EmissionAnchor::new(input.initial_year, input.emissions_initial),
            peak: EmissionAnchor::new(input.peak_year, input.emissions_peak),
            target: EmissionAnchor::new(input.target_year, input.target_emissions),
        }
    }

    pub fn as_array(&self) -> [EmissionAnchor; 3] {
        [self.initial, self.peak, self.target]
    }

    /// Emissions at `year`, held flat outside the anchored span.
    pub fn value_at(&self, year: i32) -> f64 {
        if year < self.initial.year {
            self.initial.value
        } else if year <= self.peak.year {
            lerp(self.initial, self.peak, year)
        } else if year <= self.target.year {
            lerp(self.peak, self.target, year)
        } else {
            self.target.value
        }
    }
}

// Written as a*(1-t) + b*t so both endpoints come back bit-exact.
fn lerp(start: EmissionAnchor, end: EmissionAnchor, year: i32) -> f64 {
    let span = end.year - start.year;
    let progress = if span == 0 {
        1.0
    } else {
        (year - start.year) as f64 / span as f64
    };
    start.value * (1.0 - progress) + end.value * progress
}

/// Per-year emissions over `[initial_year, target_year]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsTrajectory {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

impl EmissionsTrajectory {
    pub fn value_at(&self, year: i32) -> Option<f64> {
        let first = *self.years.first()?;
        let index = usize::try_from(year - first).ok()?;
        self.values.get(index).copied()
    }

    /// Sum of every yearly value, in MtCO2e.
    pub fn cumulative(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

pub fn interpolate_emissions(anchors: &EmissionAnchors) -> EmissionsTrajectory {
    let years: Vec<i32> = (anchors.initial.year..=anchors.target.year).collect();
    let values = years.iter().map(|&year| anchors.value_at(year)).collect();
    EmissionsTrajectory { years, values }
}
