//! Cross-filter reconciliation.
//!
//! Every UI event lands here as an [`UpdateInput`]: the identity of the one
//! control that fired plus the current value of every control. The
//! reconciler merges that with the previous [`SessionState`] and produces a
//! freshly computed [`FilteredView`] plus the state to carry into the next
//! update. Only the triggering control's value is adopted; everything else
//! passes through from memory, so a chart redraw can never clobber a
//! selection the user made on a different control.
//!
//! Reconciliation is a pure function of `(input, previous state)` over the
//! immutable base table. It never errors: stale or wrong-shaped payloads
//! are discarded, and over-constrained filters legitimately produce an
//! empty view.

use std::sync::Arc;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use sharkboard_types::{Grouping, ProvokedFilter, Selection};

use crate::config::Dashboard;
use crate::dataset::{Column, FilteredView, IncidentTable};
use crate::session::SessionState;

/// Which single control fired the current update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    /// The state multi-select changed.
    StateSelect,
    /// The provoked/unprovoked checkbox set changed.
    ProvokedToggle,
    /// The together/separate radio changed.
    GroupingMode,
    /// A category was clicked on one chart.
    ChartClick { chart_id: String },
    /// The year brush on the trend chart moved.
    TrendBrush,
    /// "Reset Graphs": clear chart-derived click and brush memory.
    ResetCharts,
    /// "Reset Filters": restore the widget-backed controls to defaults.
    ResetFilters,
}

/// One UI event: the trigger plus the current value of every control.
///
/// Values for controls other than the trigger may be stale echoes of a
/// previous render; they are ignored in favor of remembered state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateInput {
    pub trigger: Trigger,
    #[serde(default)]
    pub selected_states: Vec<String>,
    #[serde(default)]
    pub provoked: ProvokedFilter,
    #[serde(default)]
    pub grouping: Grouping,
    #[serde(default)]
    pub chart_clicks: HashMap<String, Selection>,
    #[serde(default)]
    pub trend_brush: Selection,
}

impl UpdateInput {
    /// An input carrying only a trigger, with every control at its default.
    pub fn bare(trigger: Trigger) -> Self {
        Self {
            trigger,
            selected_states: Vec::new(),
            provoked: ProvokedFilter::BOTH,
            grouping: Grouping::Together,
            chart_clicks: HashMap::new(),
            trend_brush: Selection::None,
        }
    }
}

/// Merge one UI event into the session and recompute the filtered view.
///
/// The view is always rebuilt from the full base table so no stale filter
/// can compound across updates.
pub fn reconcile(
    table: &Arc<IncidentTable>,
    dashboard: &Dashboard,
    input: &UpdateInput,
    prev: &SessionState,
) -> (FilteredView, SessionState) {
    let mut next = prev.clone();

    match &input.trigger {
        Trigger::ResetCharts => {
            // Chart memory goes; the widget-backed controls keep whatever
            // the user currently has them set to.
            next.selected_states = input.selected_states.clone();
            next.provoked = input.provoked;
            next.grouping = input.grouping;
            next.clear_chart_memory();
        }
        Trigger::ResetFilters => next.reset_filters(table),
        Trigger::StateSelect => next.selected_states = input.selected_states.clone(),
        Trigger::ProvokedToggle => next.provoked = input.provoked,
        Trigger::GroupingMode => next.grouping = input.grouping,
        Trigger::ChartClick { chart_id } => adopt_click(table, dashboard, input, chart_id, &mut next),
        Trigger::TrendBrush => next.trend_brush = adopt_brush(&input.trend_brush),
    }

    let view = apply_filters(table, dashboard, &next);
    (view, next)
}

/// Adopt a chart click, discarding payloads that cannot be applied.
fn adopt_click(
    table: &IncidentTable,
    dashboard: &Dashboard,
    input: &UpdateInput,
    chart_id: &str,
    next: &mut SessionState,
) {
    let Some(binding) = dashboard.chart(chart_id) else {
        tracing::warn!(chart_id, "click on unconfigured chart ignored");
        return;
    };

    let payload = input
        .chart_clicks
        .get(chart_id)
        .cloned()
        .unwrap_or_default();

    let adopted = match payload {
        Selection::Category { ref value } if !table.contains_category(binding.column, value) => {
            // Stale payload from a render against different data
            tracing::warn!(chart_id, value = %value, "discarding click on unknown category");
            Selection::None
        }
        Selection::YearRange { .. } => {
            tracing::warn!(chart_id, "discarding range payload on a category chart");
            Selection::None
        }
        other => other,
    };

    next.chart_clicks.insert(chart_id.to_string(), adopted);
}

/// Adopt a brush payload; anything but a well-formed range means no filter.
fn adopt_brush(payload: &Selection) -> Selection {
    match payload {
        Selection::YearRange { .. } | Selection::None => payload.clone(),
        Selection::Category { .. } => {
            tracing::warn!("discarding category payload on the trend brush");
            Selection::None
        }
    }
}

/// Rebuild the filtered view from the base table and the merged state.
fn apply_filters(
    table: &Arc<IncidentTable>,
    dashboard: &Dashboard,
    state: &SessionState,
) -> FilteredView {
    // Resolve remembered clicks to column/value pairs up front; slots for
    // charts no longer in the layout are ignored.
    let clicks: Vec<(Column, &str)> = state
        .chart_clicks
        .iter()
        .filter_map(|(chart_id, selection)| {
            let binding = dashboard.chart(chart_id)?;
            selection.as_category().map(|v| (binding.column, v))
        })
        .collect();

    let year_range = state.trend_brush.as_year_range().map(|(start, end)| {
        // Out-of-domain bounds fall back to the dataset's own span instead
        // of excluding everything; reversed bounds are normalized.
        let (min_year, max_year) = table.year_bounds();
        let lo = start.min(end).clamp(min_year, max_year);
        let hi = start.max(end).clamp(min_year, max_year);
        (lo, hi)
    });

    FilteredView::filtered(table, |record| {
        state
            .selected_states
            .iter()
            .any(|s| s == &record.state_names)
            && state.provoked.matches(&record.provoked_unprovoked)
            && clicks
                .iter()
                .all(|(column, value)| column.value(record) == *value)
            && year_range
                .is_none_or(|(lo, hi)| (lo..=hi).contains(&record.incident_year))
    })
}
