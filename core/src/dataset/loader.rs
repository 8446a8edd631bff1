//! CSV loading with fail-fast schema validation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::{IncidentTable, normalize};
use crate::error::Error;

/// Columns that must appear in the CSV header. A missing one is a contract
/// violation surfaced at startup, never per-update.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "incident_year",
    "incident_month",
    "state_names",
    "provoked_unprovoked",
    "victim_injury",
    "site_category_cleaned",
    "injury_severity",
    "shark_common_name",
    "victim_activity",
];

/// One CSV row as it arrives, before normalization. Years and months come in
/// as floats because the source exports them that way (`"1990.0"`).
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(default)]
    pub incident_year: Option<f64>,
    #[serde(default)]
    pub incident_month: Option<f64>,
    #[serde(default)]
    pub month_year: Option<String>,
    #[serde(default)]
    pub state_names: Option<String>,
    #[serde(default)]
    pub provoked_unprovoked: Option<String>,
    #[serde(default)]
    pub victim_injury: Option<String>,
    #[serde(default)]
    pub site_category_cleaned: Option<String>,
    #[serde(default)]
    pub injury_severity: Option<String>,
    #[serde(default)]
    pub shark_common_name: Option<String>,
    #[serde(default)]
    pub victim_activity: Option<String>,
    #[serde(default)]
    pub victim_gender: Option<String>,
}

/// Load and normalize the incident table from a CSV file.
pub fn load_table(path: &Path) -> Result<IncidentTable, Error> {
    let file = File::open(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_table(file)
}

/// Load and normalize the incident table from any CSV byte stream.
pub fn read_table<R: Read>(input: R) -> Result<IncidentTable, Error> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *required) {
            return Err(Error::MissingColumn((*required).to_string()));
        }
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;
    let mut malformed = 0usize;
    for (idx, row) in reader.deserialize::<RawRecord>().enumerate() {
        match row {
            Ok(raw) => match normalize::normalize(raw) {
                Some(record) => records.push(record),
                None => dropped += 1,
            },
            Err(e) => {
                malformed += 1;
                // +2: one for the header line, one for 1-based numbering
                tracing::warn!(line = idx + 2, error = %e, "skipping malformed row");
            }
        }
    }

    tracing::info!(
        rows = records.len(),
        dropped,
        malformed,
        "loaded incident table"
    );
    IncidentTable::from_records(records)
}
