//! Chart-ready aggregate rows shared between the core queries and the
//! presentation-facing worker protocol.

use serde::{Deserialize, Serialize};

/// One category and its incident count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

impl CategoryCount {
    pub fn new(category: impl Into<String>, count: i64) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}

/// One year of the incident trend line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: i64,
}

/// Per-category counts split by provocation status (zero-filled).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCount {
    pub category: String,
    pub provoked: i64,
    pub unprovoked: i64,
}

impl GroupedCount {
    pub fn total(&self) -> i64 {
        self.provoked + self.unprovoked
    }
}

/// Per-year counts split by provocation status (zero-filled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedYearCount {
    pub year: i32,
    pub provoked: i64,
    pub unprovoked: i64,
}

/// One display row of a top-N table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketedRow {
    pub label: String,
    pub count: i64,
    /// Hover/detail text: one line for real categories, the full excluded
    /// breakdown for the synthetic others row.
    pub hover_text: String,
    /// True only for the synthetic `"others: {K} types"` row.
    pub is_others: bool,
}

/// A top-N-plus-others table ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BucketedTable {
    pub rows: Vec<BucketedRow>,
    /// Newline-joined breakdown of the excluded categories, when any exist.
    pub others_detail: Option<String>,
}

/// How a configured chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// The data series for one chart in one update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData {
    /// Single trend line (together mode).
    Trend { points: Vec<YearCount> },
    /// Provoked/unprovoked trend pair (separate mode).
    GroupedTrend { points: Vec<GroupedYearCount> },
    /// Single-series categorical counts (together mode).
    Categories { rows: Vec<CategoryCount> },
    /// Provoked/unprovoked categorical counts (separate mode).
    GroupedCategories { rows: Vec<GroupedCount> },
    /// Top-N table with the synthetic others row (together mode).
    Bucketed { table: BucketedTable },
}

/// One rendered chart: identity plus its data for this update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPayload {
    pub chart_id: String,
    pub title: String,
    pub chart_kind: ChartKind,
    pub data: ChartData,
}
