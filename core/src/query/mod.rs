//! Aggregation queries over a filtered view.
//!
//! Everything here consumes a [`FilteredView`] and produces chart-ready rows
//! from `sharkboard-types`; no rendering concerns leak in. Views are never
//! large (the dataset is a few thousand rows), so each query is a single
//! in-memory pass.

pub mod bucketing;
mod charts;

pub use charts::{UpdateOutput, render_update};

use std::collections::BTreeMap;

use hashbrown::HashMap;
use sharkboard_types::formatting::month_abbrev;
use sharkboard_types::{CategoryCount, GroupedCount, GroupedYearCount, YearCount};

use crate::dataset::{Column, FilteredView};

/// Per-category counts, descending by count; ties keep first-appearance
/// order.
pub fn value_counts(view: &FilteredView, column: Column) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for record in view.iter() {
        let value = column.value(record);
        *counts.entry(value).or_insert_with(|| {
            order.push(value);
            0
        }) += 1;
    }

    let mut rows: Vec<CategoryCount> = order
        .into_iter()
        .map(|category| CategoryCount::new(category, counts[category]))
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Incident counts per year, ascending (the trend line in together mode).
pub fn counts_by_year(view: &FilteredView) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, i64> = BTreeMap::new();
    for record in view.iter() {
        *counts.entry(record.incident_year).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Per-year provoked/unprovoked counts, ascending, zero-filled
/// (the trend line pair in separate mode).
pub fn counts_by_year_grouped(view: &FilteredView) -> Vec<GroupedYearCount> {
    let mut counts: BTreeMap<i32, (i64, i64)> = BTreeMap::new();
    for record in view.iter() {
        let entry = counts.entry(record.incident_year).or_default();
        match record.provoked_unprovoked.as_str() {
            "provoked" => entry.0 += 1,
            "unprovoked" => entry.1 += 1,
            _ => {}
        }
    }
    counts
        .into_iter()
        .map(|(year, (provoked, unprovoked))| GroupedYearCount {
            year,
            provoked,
            unprovoked,
        })
        .collect()
}

/// One yearly series per category of `column`, categories in
/// first-appearance order. Feeds the custom split-trend chart.
pub fn counts_by_year_for(view: &FilteredView, column: Column) -> Vec<(String, Vec<YearCount>)> {
    let mut series: Vec<(String, BTreeMap<i32, i64>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in view.iter() {
        let value = column.value(record);
        let idx = match index.get(value) {
            Some(&idx) => idx,
            None => {
                index.insert(value.to_string(), series.len());
                series.push((value.to_string(), BTreeMap::new()));
                series.len() - 1
            }
        };
        *series[idx].1.entry(record.incident_year).or_default() += 1;
    }

    series
        .into_iter()
        .map(|(category, counts)| {
            let points = counts
                .into_iter()
                .map(|(year, count)| YearCount { year, count })
                .collect();
            (category, points)
        })
        .collect()
}

/// Incident counts per month label in calendar order; months with no rows
/// are omitted.
pub fn counts_by_month(view: &FilteredView) -> Vec<CategoryCount> {
    let mut by_month = [0i64; 13];
    for record in view.iter() {
        by_month[usize::from(record.incident_month.min(12))] += 1;
    }
    (1u8..=12)
        .filter(|&m| by_month[usize::from(m)] > 0)
        .map(|m| CategoryCount::new(month_abbrev(m), by_month[usize::from(m)]))
        .collect()
}

/// Per-month provoked/unprovoked counts in calendar order, zero-filled.
pub fn grouped_counts_by_month(view: &FilteredView) -> Vec<GroupedCount> {
    let mut by_month = [(0i64, 0i64); 13];
    for record in view.iter() {
        let entry = &mut by_month[usize::from(record.incident_month.min(12))];
        match record.provoked_unprovoked.as_str() {
            "provoked" => entry.0 += 1,
            "unprovoked" => entry.1 += 1,
            _ => {}
        }
    }
    (1u8..=12)
        .filter(|&m| {
            let (p, u) = by_month[usize::from(m)];
            p > 0 || u > 0
        })
        .map(|m| {
            let (provoked, unprovoked) = by_month[usize::from(m)];
            GroupedCount {
                category: month_abbrev(m).to_string(),
                provoked,
                unprovoked,
            }
        })
        .collect()
}

/// Per-category provoked/unprovoked counts with outer-merge semantics:
/// every category seen in either group appears, missing sides zero-filled,
/// ordered by provoked then unprovoked count descending.
pub fn grouped_value_counts(view: &FilteredView, column: Column) -> Vec<GroupedCount> {
    let mut counts: HashMap<&str, (i64, i64)> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for record in view.iter() {
        let value = column.value(record);
        let entry = counts.entry(value).or_insert_with(|| {
            order.push(value);
            (0, 0)
        });
        match record.provoked_unprovoked.as_str() {
            "provoked" => entry.0 += 1,
            "unprovoked" => entry.1 += 1,
            _ => {}
        }
    }

    let mut rows: Vec<GroupedCount> = order
        .into_iter()
        .map(|category| {
            let (provoked, unprovoked) = counts[category];
            GroupedCount {
                category: category.to_string(),
                provoked,
                unprovoked,
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.provoked
            .cmp(&a.provoked)
            .then(b.unprovoked.cmp(&a.unprovoked))
    });
    rows
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dataset::{IncidentRecord, IncidentTable};

    fn row(year: i32, month: u8, provoked: &str, injury: &str) -> IncidentRecord {
        IncidentRecord {
            incident_year: year,
            incident_month: month,
            month_year: None,
            state_names: "NSW".to_string(),
            provoked_unprovoked: provoked.to_string(),
            victim_injury: injury.to_string(),
            site_category_cleaned: "Coastal".to_string(),
            injury_severity: "Others".to_string(),
            shark_common_name: "White".to_string(),
            victim_activity: "swimming".to_string(),
            victim_gender: "male".to_string(),
        }
    }

    fn view() -> FilteredView {
        let table = Arc::new(
            IncidentTable::from_records(vec![
                row(1990, 2, "provoked", "injured"),
                row(1990, 1, "unprovoked", "injured"),
                row(1991, 2, "provoked", "uninjured"),
                row(1993, 12, "unprovoked", "fatal"),
                row(1993, 2, "provoked", "injured"),
            ])
            .unwrap(),
        );
        FilteredView::full(&table)
    }

    #[test]
    fn test_value_counts_descending_with_stable_ties() {
        let rows = value_counts(&view(), Column::VictimInjury);
        assert_eq!(rows[0], CategoryCount::new("injured", 3));
        // "uninjured" and "fatal" tie at 1; first appearance wins
        assert_eq!(rows[1], CategoryCount::new("uninjured", 1));
        assert_eq!(rows[2], CategoryCount::new("fatal", 1));
    }

    #[test]
    fn test_counts_by_year_ascending_and_gapped() {
        let rows = counts_by_year(&view());
        assert_eq!(
            rows,
            vec![
                YearCount { year: 1990, count: 2 },
                YearCount { year: 1991, count: 1 },
                YearCount { year: 1993, count: 2 },
            ]
        );
    }

    #[test]
    fn test_counts_by_year_grouped_zero_fills() {
        let rows = counts_by_year_grouped(&view());
        assert_eq!(
            rows,
            vec![
                GroupedYearCount { year: 1990, provoked: 1, unprovoked: 1 },
                GroupedYearCount { year: 1991, provoked: 1, unprovoked: 0 },
                GroupedYearCount { year: 1993, provoked: 1, unprovoked: 1 },
            ]
        );
    }

    #[test]
    fn test_counts_by_month_calendar_order() {
        let rows = counts_by_month(&view());
        assert_eq!(
            rows,
            vec![
                CategoryCount::new("Jan", 1),
                CategoryCount::new("Feb", 3),
                CategoryCount::new("Dec", 1),
            ]
        );
    }

    #[test]
    fn test_grouped_value_counts_outer_merge() {
        let rows = grouped_value_counts(&view(), Column::VictimInjury);
        assert_eq!(
            rows,
            vec![
                GroupedCount {
                    category: "injured".to_string(),
                    provoked: 2,
                    unprovoked: 1,
                },
                GroupedCount {
                    category: "uninjured".to_string(),
                    provoked: 1,
                    unprovoked: 0,
                },
                // unprovoked-only category still present, zero-filled left side
                GroupedCount {
                    category: "fatal".to_string(),
                    provoked: 0,
                    unprovoked: 1,
                },
            ]
        );
    }

    #[test]
    fn test_counts_by_year_for_column() {
        let series = counts_by_year_for(&view(), Column::ProvokedUnprovoked);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, "provoked");
        assert_eq!(
            series[0].1,
            vec![
                YearCount { year: 1990, count: 1 },
                YearCount { year: 1991, count: 1 },
                YearCount { year: 1993, count: 1 },
            ]
        );
        assert_eq!(series[1].0, "unprovoked");
        assert_eq!(series[1].1.len(), 2);
    }

    #[test]
    fn test_empty_view_yields_empty_series() {
        let table = Arc::new(
            IncidentTable::from_records(vec![row(1990, 1, "provoked", "injured")]).unwrap(),
        );
        let empty = FilteredView::filtered(&table, |_| false);
        assert!(value_counts(&empty, Column::VictimInjury).is_empty());
        assert!(counts_by_year(&empty).is_empty());
        assert!(grouped_value_counts(&empty, Column::VictimInjury).is_empty());
        assert!(counts_by_month(&empty).is_empty());
    }
}
