//! Per-update chart assembly.
//!
//! Walks the configured layout once per update and produces the full
//! series bundle the presentation layer redraws from.

use serde::{Deserialize, Serialize};
use sharkboard_types::{ChartData, ChartKind, ChartPayload, Grouping};

use super::{
    bucketing, counts_by_month, counts_by_year, counts_by_year_grouped, grouped_counts_by_month,
    grouped_value_counts, value_counts,
};
use crate::config::{Dashboard, TREND_CHART_ID, TREND_CHART_TITLE};
use crate::dataset::{Column, FilteredView};
use crate::session::SessionState;

/// Everything the presentation layer needs after one update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOutput {
    /// Rows surviving the merged filter.
    pub row_count: usize,
    /// The built-in trend chart followed by every configured chart.
    pub charts: Vec<ChartPayload>,
    /// The remembered-selection bundle to carry into the next event.
    pub state: SessionState,
}

/// Recompute every chart for one update.
pub fn render_update(
    view: &FilteredView,
    state: &SessionState,
    dashboard: &Dashboard,
) -> UpdateOutput {
    let mut charts = Vec::with_capacity(dashboard.charts().len() + 1);

    let trend_data = match state.grouping {
        Grouping::Together => ChartData::Trend {
            points: counts_by_year(view),
        },
        Grouping::Separate => ChartData::GroupedTrend {
            points: counts_by_year_grouped(view),
        },
    };
    charts.push(ChartPayload {
        chart_id: TREND_CHART_ID.to_string(),
        title: TREND_CHART_TITLE.to_string(),
        chart_kind: ChartKind::Line,
        data: trend_data,
    });

    for binding in dashboard.charts() {
        charts.push(ChartPayload {
            chart_id: binding.id.clone(),
            title: binding.title.clone(),
            chart_kind: binding.kind,
            data: categorical_chart_data(
                view,
                state.grouping,
                binding.column,
                binding.bucketed,
                dashboard.top_n,
            ),
        });
    }

    UpdateOutput {
        row_count: view.len(),
        charts,
        state: state.clone(),
    }
}

fn categorical_chart_data(
    view: &FilteredView,
    grouping: Grouping,
    column: Column,
    bucketed: bool,
    top_n: usize,
) -> ChartData {
    match grouping {
        Grouping::Together => {
            // Months stay in calendar order rather than count order
            let rows = if column == Column::IncidentMonth {
                counts_by_month(view)
            } else {
                value_counts(view, column)
            };
            if bucketed {
                ChartData::Bucketed {
                    table: bucketing::bucket_top_n(&rows, top_n),
                }
            } else {
                ChartData::Categories { rows }
            }
        }
        Grouping::Separate => {
            let rows = if column == Column::IncidentMonth {
                grouped_counts_by_month(view)
            } else {
                grouped_value_counts(view, column)
            };
            let rows = if bucketed {
                bucketing::bucket_top_n_grouped(&rows, top_n)
            } else {
                rows
            };
            ChartData::GroupedCategories { rows }
        }
    }
}
