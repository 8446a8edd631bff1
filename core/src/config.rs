//! Dashboard layout configuration.
//!
//! Which categorical charts exist, what column each one is bound to, and how
//! the high-cardinality ones are bucketed is configuration over the same
//! reconciler core, not separate code paths. Layouts load from TOML; a
//! stock four-chart layout is built in as the default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sharkboard_types::ChartKind;

use crate::dataset::Column;
use crate::error::Error;

/// Chart id of the built-in year trend chart (the brush target).
pub const TREND_CHART_ID: &str = "incident-trend";

/// Title of the built-in year trend chart.
pub const TREND_CHART_TITLE: &str = "Incidents Over Time";

/// Default cutoff for top-N bucketing.
pub const DEFAULT_TOP_N: usize = 7;

/// One configured categorical chart, as written in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    /// Dataset column name; resolved and validated at startup.
    pub column: String,
    /// Collapse categories beyond `top_n` into an others row.
    #[serde(default)]
    pub bucketed: bool,
}

/// A dashboard layout file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default, rename = "chart")]
    pub charts: Vec<ChartSpec>,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl DashboardConfig {
    /// Load a layout from a TOML file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&contents).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Resolve column bindings, failing fast on unknown columns or
    /// duplicate chart ids.
    pub fn resolve(self) -> Result<Dashboard, Error> {
        let mut charts = Vec::with_capacity(self.charts.len());
        for spec in self.charts {
            if charts.iter().any(|c: &ChartBinding| c.id == spec.id) {
                return Err(Error::DuplicateChart(spec.id));
            }
            let column = Column::from_name(&spec.column).ok_or_else(|| Error::UnknownColumn {
                chart: spec.id.clone(),
                column: spec.column.clone(),
            })?;
            charts.push(ChartBinding {
                id: spec.id,
                title: spec.title,
                kind: spec.kind,
                column,
                bucketed: spec.bucketed,
            });
        }
        Ok(Dashboard {
            top_n: self.top_n,
            charts,
        })
    }
}

/// A chart with its column binding resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBinding {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub column: Column,
    pub bucketed: bool,
}

/// A validated dashboard layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub top_n: usize,
    charts: Vec<ChartBinding>,
}

impl Default for Dashboard {
    /// The stock general page: injury bar, monthly bar, and a bucketed
    /// top-sharks bar alongside the built-in trend chart.
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            charts: vec![
                ChartBinding {
                    id: "victim-injury-bar".to_string(),
                    title: "Injury Type".to_string(),
                    kind: ChartKind::Bar,
                    column: Column::VictimInjury,
                    bucketed: false,
                },
                ChartBinding {
                    id: "monthly-incidents-bar".to_string(),
                    title: "Monthly Incidents".to_string(),
                    kind: ChartKind::Bar,
                    column: Column::IncidentMonth,
                    bucketed: false,
                },
                ChartBinding {
                    id: "top-sharks-bar".to_string(),
                    title: "Most Dangerous Sharks".to_string(),
                    kind: ChartKind::Bar,
                    column: Column::SharkCommonName,
                    bucketed: true,
                },
            ],
        }
    }
}

impl Dashboard {
    pub fn charts(&self) -> &[ChartBinding] {
        &self.charts
    }

    /// Look up a clickable chart by id.
    pub fn chart(&self, id: &str) -> Option<&ChartBinding> {
        self.charts.iter().find(|c| c.id == id)
    }
}
