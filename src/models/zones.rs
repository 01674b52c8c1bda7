use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Sign classification of the smoothed oscillator.
///
/// Zero lands on the contraction side. That boundary decision is visible in
/// rendered zone edges, so it stays fixed here rather than in callers.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum ZoneKind {
    Expansion,
    Contraction,
}

impl ZoneKind {
    pub fn from_smoothed(value: f64) -> Self {
        if value > 0.0 {
            ZoneKind::Expansion
        } else {
            ZoneKind::Contraction
        }
    }
}

/// A maximal run of consecutive dates sharing one oscillator sign
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: ZoneKind,
}

impl Zone {
    /// Number of calendar days covered, both endpoints inclusive
    pub fn num_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Total calendar days spent in each kind across a zone list, every kind
/// present even when its total is zero
pub fn day_totals(zones: &[Zone]) -> Vec<(ZoneKind, i64)> {
    ZoneKind::iter()
        .map(|kind| {
            let days = zones
                .iter()
                .filter(|zone| zone.kind == kind)
                .map(Zone::num_days)
                .sum();
            (kind, days)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_classifies_as_contraction() {
        assert_eq!(ZoneKind::from_smoothed(0.0), ZoneKind::Contraction);
        assert_eq!(ZoneKind::from_smoothed(-0.5), ZoneKind::Contraction);
        assert_eq!(ZoneKind::from_smoothed(1e-9), ZoneKind::Expansion);
    }

    #[test]
    fn singleton_zone_spans_one_day() {
        let zone = Zone {
            start_date: "2021-06-01".parse().unwrap(),
            end_date: "2021-06-01".parse().unwrap(),
            kind: ZoneKind::Expansion,
        };

        assert_eq!(zone.num_days(), 1);
        assert!(zone.contains("2021-06-01".parse().unwrap()));
    }

    #[test]
    fn day_totals_cover_every_kind() {
        let zones = [
            Zone {
                start_date: "2021-01-01".parse().unwrap(),
                end_date: "2021-01-10".parse().unwrap(),
                kind: ZoneKind::Expansion,
            },
            Zone {
                start_date: "2021-01-11".parse().unwrap(),
                end_date: "2021-01-12".parse().unwrap(),
                kind: ZoneKind::Contraction,
            },
            Zone {
                start_date: "2021-01-13".parse().unwrap(),
                end_date: "2021-01-17".parse().unwrap(),
                kind: ZoneKind::Expansion,
            },
        ];

        let totals = day_totals(&zones);
        assert!(totals.contains(&(ZoneKind::Expansion, 15)));
        assert!(totals.contains(&(ZoneKind::Contraction, 2)));
    }

    #[test]
    fn day_totals_list_kinds_with_no_zones() {
        let totals = day_totals(&[]);

        assert_eq!(totals.len(), 2, "both kinds reported");
        assert!(totals.iter().all(|&(_, days)| days == 0));
    }
}
