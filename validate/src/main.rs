//! sharkboard-validate - Dataset validation and summary tool.
//!
//! Loads an incident CSV, runs the same startup schema validation the
//! dashboard does, and prints a summary of the table plus the value counts
//! behind each configured chart. Exits non-zero when the dataset or layout
//! would be rejected at dashboard startup.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use sharkboard_core::query::{bucketing, value_counts};
use sharkboard_core::{Dashboard, DashboardConfig, Error, FilteredView, IncidentTable, load_table};
use sharkboard_types::formatting::incident_hover;

#[derive(Parser)]
#[command(
    name = "sharkboard-validate",
    about = "Validate a shark-incident CSV and print a dataset summary"
)]
struct Args {
    /// Path to the incident CSV
    csv: PathBuf,

    /// Dashboard layout TOML (defaults to the built-in layout)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also print per-chart value counts
    #[arg(long)]
    counts: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("validation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let dashboard = match &args.config {
        Some(path) => DashboardConfig::load(path)?.resolve()?,
        None => Dashboard::default(),
    };
    let table = Arc::new(load_table(&args.csv)?);

    print_summary(&table, &dashboard);
    if args.counts {
        print_counts(&table, &dashboard);
    }
    Ok(())
}

fn heading(text: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        format!("\x1b[1m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn print_summary(table: &IncidentTable, dashboard: &Dashboard) {
    let (min_year, max_year) = table.year_bounds();

    println!("{}", heading("=== Dataset Summary ==="));
    println!("  Rows: {}", table.len());
    println!("  Years: {} - {}", min_year, max_year);
    println!(
        "  States ({}): {}",
        table.states().len(),
        table.states().join(", ")
    );
    println!();

    println!("{}", heading("=== Dashboard Layout ==="));
    println!("  Charts: {} (+ trend)", dashboard.charts().len());
    for binding in dashboard.charts() {
        println!(
            "  [{}] {:?} on '{}'{}",
            binding.id,
            binding.kind,
            binding.column.as_str(),
            if binding.bucketed { " (bucketed)" } else { "" }
        );
    }
    println!();
}

fn print_counts(table: &Arc<IncidentTable>, dashboard: &Dashboard) {
    let view = FilteredView::full(table);

    for binding in dashboard.charts() {
        println!("{}", heading(&format!("--- {} ---", binding.title)));

        let rows = value_counts(&view, binding.column);
        if binding.bucketed {
            let bucketed = bucketing::bucket_top_n(&rows, dashboard.top_n);
            for row in &bucketed.rows {
                println!("  {}", incident_hover(&row.label, row.count));
            }
            if let Some(detail) = &bucketed.others_detail {
                for line in detail.lines() {
                    println!("    | {line}");
                }
            }
        } else {
            for row in &rows {
                println!("  {}", incident_hover(&row.category, row.count));
            }
        }
        println!();
    }
}
