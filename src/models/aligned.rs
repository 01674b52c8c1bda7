use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One joined (date, target, driver-oscillator) observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedRecord {
    pub date: NaiveDate,
    pub target_value: f64,
    pub driver_oscillator: f64,
}

// ============================================================================
// AlignedTable: the date-aligned join of target and driver series
// ============================================================================

/// The inner join of the target series and the normalized driver series.
///
/// Because both inputs sit on contiguous daily grids, the intersection of
/// their spans is itself contiguous: record `i` is exactly `i` calendar days
/// after record 0. `shift_driver` relies on this to turn a calendar-day shift
/// into a row shift.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlignedTable {
    records: Vec<AlignedRecord>,
}

impl AlignedTable {
    pub fn new(records: Vec<AlignedRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AlignedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|rec| rec.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|rec| rec.date)
    }

    /// Shift the driver column back in time by `lag_days`: the driver value
    /// reported for date `t` is the one originally observed `lag_days`
    /// earlier. Rows without that much history are dropped from the front.
    pub fn shift_driver(&self, lag_days: usize) -> AlignedTable {
        if lag_days >= self.records.len() {
            return AlignedTable::default();
        }

        let shifted = self.records[lag_days..]
            .iter()
            .enumerate()
            .map(|(idx, rec)| AlignedRecord {
                date: rec.date,
                target_value: rec.target_value,
                driver_oscillator: self.records[idx].driver_oscillator,
            })
            .collect();

        AlignedTable::new(shifted)
    }

    /// Render as delimited text for tabular export
    pub fn to_delimited(&self) -> String {
        let mut out = String::from("date,target_value,driver_oscillator\n");
        for rec in &self.records {
            let _ = writeln!(
                out,
                "{},{},{}",
                rec.date, rec.target_value, rec.driver_oscillator
            );
        }
        out
    }
}
