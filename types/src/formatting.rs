//! Centralized label formatting utilities.
//!
//! All display labels go through this module so chart hovers, the others
//! bucket, and month axes stay consistent across every dashboard surface.

/// Month number (1-12) to its three-letter axis label.
///
/// Out-of-range values (including 0 for rows with no recorded month)
/// format as `"Unknown"` rather than panicking.
///
/// # Examples
/// ```
/// use sharkboard_types::formatting::month_abbrev;
/// assert_eq!(month_abbrev(1), "Jan");
/// assert_eq!(month_abbrev(12), "Dec");
/// assert_eq!(month_abbrev(0), "Unknown");
/// ```
pub fn month_abbrev(month: u8) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "Unknown",
    }
}

/// Label for the synthetic row that absorbs categories beyond the top N.
///
/// The `"others: {K} types"` form cannot collide with a real category label
/// produced by [`title_case`] normalization (those never contain `:`).
///
/// # Examples
/// ```
/// use sharkboard_types::formatting::others_label;
/// assert_eq!(others_label(3), "others: 3 types");
/// ```
pub fn others_label(excluded: usize) -> String {
    format!("others: {} types", excluded)
}

/// Hover line for a single category row.
///
/// # Examples
/// ```
/// use sharkboard_types::formatting::incident_hover;
/// assert_eq!(incident_hover("White", 71), "White: 71 incidents");
/// ```
pub fn incident_hover(label: &str, count: i64) -> String {
    format!("{}: {} incidents", label, count)
}

/// Title-case a categorical value: first letter of each whitespace-separated
/// word uppercased, the rest lowercased.
///
/// # Examples
/// ```
/// use sharkboard_types::formatting::title_case;
/// assert_eq!(title_case("bronze whaler"), "Bronze Whaler");
/// assert_eq!(title_case("island open ocean"), "Island Open Ocean");
/// assert_eq!(title_case("NSW"), "Nsw");
/// ```
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, word) in s.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            for c in chars {
                result.extend(c.to_lowercase());
            }
        }
    }
    result
}
