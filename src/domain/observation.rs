use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A single dated measurement exactly as a loader delivered it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

// ============================================================================
// RawSeries: irregularly sampled input series (pre-normalization)
// ============================================================================

/// An irregularly sampled series as produced by a loader.
///
/// Construction cleans the input so the rest of the pipeline never has to:
/// non-finite values are dropped, observations are sorted by date, and
/// duplicate dates collapse to the most recently supplied observation.
/// Dates are therefore strictly increasing after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSeries {
    observations: Vec<Observation>,
}

impl RawSeries {
    pub fn from_observations(mut observations: Vec<Observation>) -> Self {
        observations.retain(|obs| obs.value.is_finite());
        observations.sort_by_key(|obs| obs.date);

        // Last one wins on duplicate dates, so dedup over the reversed order
        let mut observations: Vec<Observation> = observations
            .into_iter()
            .rev()
            .unique_by(|obs| obs.date)
            .collect();
        observations.reverse();

        Self { observations }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|obs| obs.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|obs| obs.date)
    }
}
