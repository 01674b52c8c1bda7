use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// DailySeries: one value per calendar day on a contiguous grid
// ============================================================================

/// A series sampled at exactly one point per calendar day.
///
/// Only the first day is stored; the date of index `i` is `first_day + i`,
/// which keeps date/index conversion to plain integer arithmetic. Values may
/// be NaN while a gap is still unfilled (pre-interpolation); every public
/// producer in `analysis` returns fully filled series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySeries {
    first_day: NaiveDate,
    values: Vec<f64>,
}

impl DailySeries {
    pub fn new(first_day: NaiveDate, values: Vec<f64>) -> Self {
        Self { first_day, values }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Date of the last grid point. Meaningless for an empty series.
    pub fn last_day(&self) -> NaiveDate {
        self.first_day + Duration::days(self.values.len() as i64 - 1)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn date_at(&self, index: usize) -> NaiveDate {
        self.first_day + Duration::days(index as i64)
    }

    /// Grid index of `date`, or None when the date falls outside the span
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.first_day).num_days();
        if offset < 0 || offset >= self.values.len() as i64 {
            return None;
        }
        Some(offset as usize)
    }

    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        self.index_of(date).map(|idx| self.values[idx])
    }

    /// New series on the same grid with replaced values
    pub fn with_values(&self, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            self.values.len(),
            "replacement values must match the grid length"
        );
        Self {
            first_day: self.first_day,
            values,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, &value)| (self.date_at(idx), value))
    }
}
