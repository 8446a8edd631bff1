//! Selection payloads carried by interactive dashboard controls.
//!
//! Each rememberable control (a clickable chart, the trend brush) holds one
//! [`Selection`]. Modeling the payload as a tagged variant means a
//! wrong-shaped payload is unrepresentable rather than a runtime check.

use serde::{Deserialize, Serialize};

/// One control's selection payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    /// Nothing selected on this control.
    #[default]
    None,
    /// A single clicked category on a categorical axis.
    Category { value: String },
    /// An inclusive year range from a brush/zoom gesture on the time axis.
    YearRange { start: i32, end: i32 },
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// The clicked category, if this is a category selection.
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Selection::Category { value } => Some(value),
            _ => None,
        }
    }

    /// The brushed `(start, end)` pair, if this is a range selection.
    pub fn as_year_range(&self) -> Option<(i32, i32)> {
        match self {
            Selection::YearRange { start, end } => Some((*start, *end)),
            _ => None,
        }
    }
}

/// State of the provoked/unprovoked checkbox pair.
///
/// Both flags set means no filter; exactly one means an equality filter;
/// neither is a legitimate empty selection that matches no row at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvokedFilter {
    pub provoked: bool,
    pub unprovoked: bool,
}

impl Default for ProvokedFilter {
    fn default() -> Self {
        Self::BOTH
    }
}

impl ProvokedFilter {
    pub const BOTH: Self = Self {
        provoked: true,
        unprovoked: true,
    };

    pub fn is_both(&self) -> bool {
        self.provoked && self.unprovoked
    }

    pub fn is_empty(&self) -> bool {
        !self.provoked && !self.unprovoked
    }

    /// Whether a row with the given `provoked_unprovoked` value passes.
    pub fn matches(&self, value: &str) -> bool {
        if self.is_both() {
            return true;
        }
        match value {
            "provoked" => self.provoked,
            "unprovoked" => self.unprovoked,
            _ => false,
        }
    }
}

/// Whether provoked and unprovoked incidents are charted as one series or two.
///
/// Purely an aggregation/display mode; it never affects the row filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    #[default]
    Together,
    Separate,
}
