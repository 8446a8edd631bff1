//! The in-memory incident table and filtered views over it.
//!
//! The table is loaded once at startup, wrapped in an [`Arc`], and never
//! mutated afterwards. Every update produces a fresh [`FilteredView`]
//! (copy-on-filter); nothing ever filters the shared table in place.

mod column;
mod loader;
mod normalize;

pub use column::Column;
pub use loader::{REQUIRED_COLUMNS, load_table};

use std::sync::Arc;

use chrono::NaiveDate;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One shark-incident record after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub incident_year: i32,
    /// 1-12; 0 when the source row had no recorded month.
    pub incident_month: u8,
    pub month_year: Option<NaiveDate>,
    pub state_names: String,
    pub provoked_unprovoked: String,
    pub victim_injury: String,
    pub site_category_cleaned: String,
    pub injury_severity: String,
    pub shark_common_name: String,
    pub victim_activity: String,
    pub victim_gender: String,
}

/// Immutable base dataset plus cached metadata.
#[derive(Debug)]
pub struct IncidentTable {
    records: Vec<IncidentRecord>,
    /// Distinct states in first-appearance order (dropdown options).
    states: Vec<String>,
    min_year: i32,
    max_year: i32,
}

impl IncidentTable {
    /// Freeze a normalized record list into a table.
    pub fn from_records(records: Vec<IncidentRecord>) -> Result<Self, Error> {
        if records.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut states = Vec::new();
        let mut seen = HashSet::new();
        let mut min_year = i32::MAX;
        let mut max_year = i32::MIN;
        for record in &records {
            if seen.insert(record.state_names.clone()) {
                states.push(record.state_names.clone());
            }
            min_year = min_year.min(record.incident_year);
            max_year = max_year.max(record.incident_year);
        }

        Ok(Self {
            records,
            states,
            min_year,
            max_year,
        })
    }

    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct states in first-appearance order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Actual `(min, max)` of `incident_year` across the base data.
    pub fn year_bounds(&self) -> (i32, i32) {
        (self.min_year, self.max_year)
    }

    /// Whether `value` occurs anywhere in the base data for `column`.
    ///
    /// Used to detect stale click payloads from renders against other data.
    pub fn contains_category(&self, column: Column, value: &str) -> bool {
        self.records.iter().any(|r| column.value(r) == value)
    }
}

/// A row subset of the base table: always original order, never duplicated.
#[derive(Debug, Clone)]
pub struct FilteredView {
    table: Arc<IncidentTable>,
    rows: Vec<usize>,
}

impl FilteredView {
    /// A view over every row of `table`, in order.
    pub fn full(table: &Arc<IncidentTable>) -> Self {
        Self {
            table: Arc::clone(table),
            rows: (0..table.records.len()).collect(),
        }
    }

    /// A view over the rows of `table` matching `predicate`, preserving
    /// row order.
    pub fn filtered<F>(table: &Arc<IncidentTable>, predicate: F) -> Self
    where
        F: Fn(&IncidentRecord) -> bool,
    {
        let rows = table
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| predicate(r))
            .map(|(i, _)| i)
            .collect();
        Self {
            table: Arc::clone(table),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn table(&self) -> &Arc<IncidentTable> {
        &self.table
    }

    pub fn row_indices(&self) -> &[usize] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &IncidentRecord> {
        self.rows.iter().map(|&i| &self.table.records[i])
    }
}
