//! sharkboard-session-worker - Headless update loop for one dashboard session.
//!
//! The presentation layer spawns one worker per session, writes one UI-event
//! JSON object per line to stdin, and reads one update JSON object per line
//! from stdout. Events are processed strictly one at a time, so remembered
//! selections can never interleave across updates.
//!
//! Usage: sharkboard-session-worker <csv_path> [layout_toml]
//!
//! Output: a ready line describing the dataset (dropdown options, slider
//! bounds), the initial all-selected update, then one update per event.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use sharkboard_core::config::TREND_CHART_ID;
use sharkboard_core::{
    Dashboard, DashboardConfig, FilteredView, SessionState, UpdateInput, load_table, reconcile,
    render_update,
};
use tracing_subscriber::filter::EnvFilter;

/// Startup banner: everything the UI needs to build its controls.
#[derive(Debug, Serialize)]
struct ReadyMessage<'a> {
    rows: usize,
    states: &'a [String],
    min_year: i32,
    max_year: i32,
    charts: Vec<&'a str>,
}

/// Initialize logging, writing to SHARKBOARD_LOG_PATH if set, otherwise stderr.
/// Stdout stays reserved for the update protocol.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("SHARKBOARD_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        tracing::error!("Usage: sharkboard-session-worker <csv_path> [layout_toml]");
        std::process::exit(1);
    }

    let csv_path = PathBuf::from(&args[1]);
    let layout_path = args.get(2).map(PathBuf::from);

    let dashboard = match layout_path {
        Some(path) => match DashboardConfig::load(&path).and_then(DashboardConfig::resolve) {
            Ok(dashboard) => dashboard,
            Err(e) => {
                tracing::error!(error = %e, "invalid dashboard layout");
                std::process::exit(1);
            }
        },
        None => Dashboard::default(),
    };

    let table = match load_table(&csv_path) {
        Ok(table) => Arc::new(table),
        Err(e) => {
            tracing::error!(error = %e, "failed to load dataset");
            std::process::exit(1);
        }
    };

    let (min_year, max_year) = table.year_bounds();
    let mut chart_ids = vec![TREND_CHART_ID];
    chart_ids.extend(dashboard.charts().iter().map(|c| c.id.as_str()));
    emit(&ReadyMessage {
        rows: table.len(),
        states: table.states(),
        min_year,
        max_year,
        charts: chart_ids,
    });

    // Initial render: all-selected defaults over the full table
    let mut state = SessionState::new(&table, &dashboard);
    emit(&render_update(&FilteredView::full(&table), &state, &dashboard));

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "stdin read failed, shutting down");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let input: UpdateInput = match serde_json::from_str(&line) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed event");
                continue;
            }
        };

        let (view, next) = reconcile(&table, &dashboard, &input, &state);
        state = next;
        tracing::debug!(trigger = ?input.trigger, rows = view.len(), "update applied");
        emit(&render_update(&view, &state, &dashboard));
    }
}

fn emit<T: Serialize>(message: &T) {
    match serde_json::to_string(message) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(error = %e, "failed to serialize output"),
    }
}
