//! Category cleanup applied while rows are loaded.
//!
//! Mirrors the cleaning the source dataset ships with: shark names are
//! de-suffixed and title-cased, low-signal site and severity values collapse
//! into `"Others"`, blanks become `"Unknown"`, and rows whose provocation
//! status is the literal `"unknown"` are dropped entirely.

use sharkboard_types::formatting::title_case;

use super::IncidentRecord;
use super::loader::RawRecord;

/// Site categories kept as-is; everything else becomes `"Others"`.
const SITE_KEEP: &[&str] = &["coastal", "island_open_ocean", "estuary_harbour", "river"];

/// Normalize one raw CSV row. `None` means the row is excluded from the
/// table (unknown provocation status, per the source data cleaning).
pub(crate) fn normalize(raw: RawRecord) -> Option<IncidentRecord> {
    let incident_year = raw.incident_year? as i32;

    let provoked = raw.provoked_unprovoked.as_deref().unwrap_or("").trim();
    if provoked.eq_ignore_ascii_case("unknown") {
        return None;
    }

    let incident_month = match raw.incident_month {
        Some(m) if (1.0..=12.0).contains(&m) => m as u8,
        _ => 0,
    };

    Some(IncidentRecord {
        incident_year,
        incident_month,
        month_year: raw.month_year.as_deref().and_then(parse_month_year),
        state_names: clean_plain(raw.state_names.as_deref()),
        provoked_unprovoked: clean_plain(Some(provoked)),
        victim_injury: clean_plain(raw.victim_injury.as_deref()),
        site_category_cleaned: clean_site(raw.site_category_cleaned.as_deref()),
        injury_severity: clean_severity(raw.injury_severity.as_deref()),
        shark_common_name: clean_shark(raw.shark_common_name.as_deref()),
        victim_activity: clean_plain(raw.victim_activity.as_deref()),
        victim_gender: clean_plain(raw.victim_gender.as_deref()),
    })
}

fn parse_month_year(value: &str) -> Option<chrono::NaiveDate> {
    let value = value.trim();
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| chrono::NaiveDate::parse_from_str(&format!("1-{value}"), "%d-%m-%Y"))
        .ok()
}

/// Blank-tolerant passthrough for columns with no special cleaning.
fn clean_plain(value: Option<&str>) -> String {
    match value.map(str::trim) {
        None | Some("") => "Unknown".to_string(),
        Some(v) => v.to_string(),
    }
}

fn clean_shark(value: Option<&str>) -> String {
    let name = match value.map(str::trim) {
        None | Some("") => return "Unknown".to_string(),
        Some(v) => v,
    };
    let name = match name {
        "shark_not_known" => "unknown",
        "bronze whaler shark" => "bronze whaler",
        other => other,
    };
    title_case(&name.replace(" shark", ""))
}

fn clean_site(value: Option<&str>) -> String {
    let site = match value.map(str::trim) {
        None | Some("") => return "Unknown".to_string(),
        Some(v) => v,
    };
    if SITE_KEEP.contains(&site) {
        title_case(&site.replace('_', " "))
    } else {
        "Others".to_string()
    }
}

fn clean_severity(value: Option<&str>) -> String {
    match value.map(str::trim) {
        None | Some("") => "Unknown".to_string(),
        Some("major_lacerations") => "Maj.Lacerations".to_string(),
        Some("minor_lacerations") => "Min.Lacerations".to_string(),
        Some(_) => "Others".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(provoked: &str) -> RawRecord {
        RawRecord {
            incident_year: Some(1990.0),
            incident_month: Some(3.0),
            month_year: None,
            state_names: Some("NSW".to_string()),
            provoked_unprovoked: Some(provoked.to_string()),
            victim_injury: Some("injured".to_string()),
            site_category_cleaned: Some("coastal".to_string()),
            injury_severity: Some("major_lacerations".to_string()),
            shark_common_name: Some("white shark".to_string()),
            victim_activity: Some("swimming".to_string()),
            victim_gender: Some("female".to_string()),
        }
    }

    #[test]
    fn test_unknown_provocation_dropped() {
        assert!(normalize(raw("unknown")).is_none());
        assert!(normalize(raw("Unknown")).is_none());
        assert!(normalize(raw("provoked")).is_some());
    }

    #[test]
    fn test_missing_year_dropped() {
        let mut row = raw("provoked");
        row.incident_year = None;
        assert!(normalize(row).is_none());
    }

    #[test]
    fn test_shark_name_cleaning() {
        assert_eq!(clean_shark(Some("white shark")), "White");
        assert_eq!(clean_shark(Some("grey nurse shark")), "Grey Nurse");
        assert_eq!(clean_shark(Some("shark_not_known")), "Unknown");
        assert_eq!(clean_shark(Some("bronze whaler shark")), "Bronze Whaler");
        assert_eq!(clean_shark(Some("")), "Unknown");
        assert_eq!(clean_shark(None), "Unknown");
    }

    #[test]
    fn test_site_cleaning() {
        assert_eq!(clean_site(Some("coastal")), "Coastal");
        assert_eq!(clean_site(Some("island_open_ocean")), "Island Open Ocean");
        assert_eq!(clean_site(Some("fish farm")), "Others");
        assert_eq!(clean_site(None), "Unknown");
    }

    #[test]
    fn test_severity_cleaning() {
        assert_eq!(clean_severity(Some("major_lacerations")), "Maj.Lacerations");
        assert_eq!(clean_severity(Some("minor_lacerations")), "Min.Lacerations");
        assert_eq!(clean_severity(Some("abrasion")), "Others");
        assert_eq!(clean_severity(Some("")), "Unknown");
    }

    #[test]
    fn test_month_out_of_range_is_zero() {
        let mut row = raw("provoked");
        row.incident_month = Some(0.0);
        assert_eq!(normalize(row).unwrap().incident_month, 0);

        let mut row = raw("provoked");
        row.incident_month = None;
        assert_eq!(normalize(row).unwrap().incident_month, 0);

        let mut row = raw("provoked");
        row.incident_month = Some(11.0);
        assert_eq!(normalize(row).unwrap().incident_month, 11);
    }
}
