//! Categorical column addressing.
//!
//! Charts and click payloads refer to columns by their dataset header name;
//! [`Column`] resolves those names once at startup so per-update code never
//! does string-keyed field lookup on a row.

use serde::{Deserialize, Serialize};
use sharkboard_types::formatting::month_abbrev;

use super::IncidentRecord;

/// A categorical column of the incident table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "state_names")]
    StateNames,
    #[serde(rename = "provoked_unprovoked")]
    ProvokedUnprovoked,
    #[serde(rename = "victim_injury")]
    VictimInjury,
    #[serde(rename = "site_category_cleaned")]
    SiteCategory,
    #[serde(rename = "injury_severity")]
    InjurySeverity,
    #[serde(rename = "shark_common_name")]
    SharkCommonName,
    #[serde(rename = "victim_activity")]
    VictimActivity,
    #[serde(rename = "victim_gender")]
    VictimGender,
    #[serde(rename = "incident_month")]
    IncidentMonth,
}

impl Column {
    /// All categorical columns, in dataset header order.
    pub const ALL: &'static [Column] = &[
        Column::StateNames,
        Column::ProvokedUnprovoked,
        Column::VictimInjury,
        Column::SiteCategory,
        Column::InjurySeverity,
        Column::SharkCommonName,
        Column::VictimActivity,
        Column::VictimGender,
        Column::IncidentMonth,
    ];

    /// Resolve a dataset header name, e.g. from a chart binding.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "state_names" => Some(Column::StateNames),
            "provoked_unprovoked" => Some(Column::ProvokedUnprovoked),
            "victim_injury" => Some(Column::VictimInjury),
            "site_category_cleaned" => Some(Column::SiteCategory),
            "injury_severity" => Some(Column::InjurySeverity),
            "shark_common_name" => Some(Column::SharkCommonName),
            "victim_activity" => Some(Column::VictimActivity),
            "victim_gender" => Some(Column::VictimGender),
            "incident_month" => Some(Column::IncidentMonth),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::StateNames => "state_names",
            Column::ProvokedUnprovoked => "provoked_unprovoked",
            Column::VictimInjury => "victim_injury",
            Column::SiteCategory => "site_category_cleaned",
            Column::InjurySeverity => "injury_severity",
            Column::SharkCommonName => "shark_common_name",
            Column::VictimActivity => "victim_activity",
            Column::VictimGender => "victim_gender",
            Column::IncidentMonth => "incident_month",
        }
    }

    /// The categorical value of this column for one record.
    ///
    /// Months are addressed by their axis label (`"Jan"`..`"Dec"`), which is
    /// also what a click on the monthly chart carries.
    pub fn value<'a>(&self, record: &'a IncidentRecord) -> &'a str {
        match self {
            Column::StateNames => &record.state_names,
            Column::ProvokedUnprovoked => &record.provoked_unprovoked,
            Column::VictimInjury => &record.victim_injury,
            Column::SiteCategory => &record.site_category_cleaned,
            Column::InjurySeverity => &record.injury_severity,
            Column::SharkCommonName => &record.shark_common_name,
            Column::VictimActivity => &record.victim_activity,
            Column::VictimGender => &record.victim_gender,
            Column::IncidentMonth => month_abbrev(record.incident_month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for column in Column::ALL {
            assert_eq!(Column::from_name(column.as_str()), Some(*column));
        }
        assert_eq!(Column::from_name("incident_year"), None);
        assert_eq!(Column::from_name(""), None);
    }
}
