//! Per-session selection state.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use sharkboard_types::{Grouping, ProvokedFilter, Selection};

use crate::config::Dashboard;
use crate::dataset::IncidentTable;

/// Pure storage for one UI session's selections.
/// Routing logic lives in [`crate::reconcile`].
///
/// One instance exists per active session; it is passed into and returned
/// from every reconcile call rather than living in any ambient global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub selected_states: Vec<String>,
    pub provoked: ProvokedFilter,
    pub grouping: Grouping,
    /// Remembered click per clickable chart, keyed by chart id. Carried
    /// across updates where the chart was not the trigger.
    pub chart_clicks: HashMap<String, Selection>,
    /// Remembered year-range brush on the trend chart.
    pub trend_brush: Selection,
}

impl SessionState {
    /// All-selected defaults for a freshly opened session.
    pub fn new(table: &IncidentTable, dashboard: &Dashboard) -> Self {
        Self {
            selected_states: table.states().to_vec(),
            provoked: ProvokedFilter::BOTH,
            grouping: Grouping::Together,
            chart_clicks: dashboard
                .charts()
                .iter()
                .map(|c| (c.id.clone(), Selection::None))
                .collect(),
            trend_brush: Selection::None,
        }
    }

    /// Clear every chart-derived selection (clicks and brush).
    /// The state multi-select and checkbox set are left alone.
    pub fn clear_chart_memory(&mut self) {
        for selection in self.chart_clicks.values_mut() {
            *selection = Selection::None;
        }
        self.trend_brush = Selection::None;
    }

    /// Restore the widget-backed controls to their defaults.
    /// Chart-derived click and brush memory is left alone.
    pub fn reset_filters(&mut self, table: &IncidentTable) {
        self.selected_states = table.states().to_vec();
        self.provoked = ProvokedFilter::BOTH;
        self.grouping = Grouping::Together;
    }

    /// The remembered click for a chart (`Selection::None` if unknown).
    pub fn remembered_click(&self, chart_id: &str) -> &Selection {
        static NONE: Selection = Selection::None;
        self.chart_clicks.get(chart_id).unwrap_or(&NONE)
    }
}
