use crate::analysis::error::AnalysisError;
use crate::models::{AlignedRecord, AlignedTable, DailySeries};

/// Inner-join the target series and the normalized driver series on exact
/// date equality.
///
/// Output records are sorted by date ascending and contain only dates present
/// in both inputs; rows where either side is non-finite are dropped. Zero
/// joined rows is `NoOverlap` — in practice that means the two series cover
/// disjoint historical ranges.
pub fn align(target: &DailySeries, driver: &DailySeries) -> Result<AlignedTable, AnalysisError> {
    if target.is_empty() || driver.is_empty() {
        return Err(AnalysisError::NoOverlap);
    }

    let start = target.first_day().max(driver.first_day());
    let end = target.last_day().min(driver.last_day());
    if start > end {
        return Err(AnalysisError::NoOverlap);
    }

    let span = (end - start).num_days() as usize + 1;
    let records: Vec<AlignedRecord> = start
        .iter_days()
        .take(span)
        .filter_map(|date| {
            let target_value = target.value_on(date)?;
            let driver_oscillator = driver.value_on(date)?;
            (target_value.is_finite() && driver_oscillator.is_finite()).then_some(AlignedRecord {
                date,
                target_value,
                driver_oscillator,
            })
        })
        .collect();

    if records.is_empty() {
        return Err(AnalysisError::NoOverlap);
    }

    Ok(AlignedTable::new(records))
}
