use itertools::Itertools;

use crate::config::ANALYSIS;
use crate::models::{AlignedTable, Zone, ZoneKind};
use crate::utils::trailing_mean;

/// Parameters for zone segmentation
#[derive(Debug, Clone)]
pub struct SegmentationParams {
    /// Trailing moving-average window applied before sign classification (days)
    pub smoothing_window_days: usize,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self {
            smoothing_window_days: ANALYSIS.zones.smoothing_window_days,
        }
    }
}

/// Segment the (lag-shifted) driver oscillator into expansion/contraction zones.
///
/// The raw daily oscillator is too noisy to shade directly, so it is first
/// smoothed with a trailing moving average (min-periods 1, so the first date
/// already classifies). Consecutive dates with the same sign coalesce into
/// one zone; together the zones cover every date of the table exactly once,
/// with the first and last dates always included even as singleton zones.
pub fn segment_zones(table: &AlignedTable, params: &SegmentationParams) -> Vec<Zone> {
    if table.is_empty() {
        return Vec::new();
    }

    let drivers: Vec<f64> = table
        .records()
        .iter()
        .map(|rec| rec.driver_oscillator)
        .collect();
    let smoothed = trailing_mean(&drivers, params.smoothing_window_days);

    let runs = table
        .records()
        .iter()
        .zip(smoothed)
        .map(|(rec, value)| (rec.date, ZoneKind::from_smoothed(value)))
        .chunk_by(|(_, kind)| *kind);

    let mut zones = Vec::new();
    for (kind, mut run) in &runs {
        let (start_date, _) = run.next().expect("chunk_by never yields empty groups");
        let end_date = run.last().map_or(start_date, |(date, _)| date);
        zones.push(Zone {
            start_date,
            end_date,
            kind,
        });
    }
    zones
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlignedRecord;
    use chrono::{Duration, NaiveDate};
    use itertools::Itertools;

    fn first_day() -> NaiveDate {
        "2020-01-01".parse().unwrap()
    }

    fn table_from(drivers: &[f64]) -> AlignedTable {
        let records = drivers
            .iter()
            .enumerate()
            .map(|(i, &driver_oscillator)| AlignedRecord {
                date: first_day() + Duration::days(i as i64),
                target_value: 1.0,
                driver_oscillator,
            })
            .collect();
        AlignedTable::new(records)
    }

    /// window 1 = no smoothing, so tests can reason about raw signs
    fn raw_sign_params() -> SegmentationParams {
        SegmentationParams {
            smoothing_window_days: 1,
        }
    }

    #[test]
    fn runs_coalesce_into_zones() {
        let table = table_from(&[1.0, 2.0, -1.0, -2.0, -3.0, 4.0]);
        let zones = segment_zones(&table, &raw_sign_params());

        assert_eq!(zones.len(), 3);
        assert_eq!(zones[0].kind, ZoneKind::Expansion);
        assert_eq!(zones[0].num_days(), 2);
        assert_eq!(zones[1].kind, ZoneKind::Contraction);
        assert_eq!(zones[1].num_days(), 3);
        assert_eq!(zones[2].kind, ZoneKind::Expansion);
        assert_eq!(zones[2].num_days(), 1, "trailing singleton zone survives");
    }

    #[test]
    fn zones_cover_the_full_range_without_gaps_or_overlaps() {
        let table = table_from(&[0.5, -0.5, 0.0, 0.5, 0.5, -1.0, 2.0, 2.0]);
        let zones = segment_zones(&table, &raw_sign_params());

        assert_eq!(zones.first().unwrap().start_date, table.first_date().unwrap());
        assert_eq!(zones.last().unwrap().end_date, table.last_date().unwrap());

        // Each zone starts the day after its predecessor ends
        for (a, b) in zones.iter().tuple_windows() {
            assert_eq!(
                b.start_date,
                a.end_date + Duration::days(1),
                "no gap or overlap between consecutive zones"
            );
        }

        // Adjacent zones always differ in kind, otherwise they would be one run
        assert!(zones.iter().tuple_windows().all(|(a, b)| a.kind != b.kind));
    }

    #[test]
    fn exact_zero_lands_in_a_contraction_zone() {
        let table = table_from(&[1.0, 0.0, 1.0]);
        let zones = segment_zones(&table, &raw_sign_params());

        assert_eq!(zones.len(), 3);
        assert_eq!(zones[1].kind, ZoneKind::Contraction);
        assert_eq!(zones[1].num_days(), 1);
    }

    #[test]
    fn smoothing_suppresses_single_day_noise() {
        // One negative blip inside a positive stretch disappears under a
        // 3-day trailing average
        let table = table_from(&[1.0, 1.0, -0.5, 1.0, 1.0, 1.0]);
        let params = SegmentationParams {
            smoothing_window_days: 3,
        };
        let zones = segment_zones(&table, &params);

        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].kind, ZoneKind::Expansion);
    }

    #[test]
    fn empty_table_yields_no_zones() {
        assert!(segment_zones(&AlignedTable::default(), &raw_sign_params()).is_empty());
    }
}
