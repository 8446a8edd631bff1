//! Top-N-plus-others bucketing for high-cardinality categorical columns.

use sharkboard_types::formatting::{incident_hover, others_label};
use sharkboard_types::{BucketedRow, BucketedTable, CategoryCount, GroupedCount};

/// Collapse everything past the top `n` rows into one synthetic others row.
///
/// `counts` must already be in display order (descending count). Kept rows
/// preserve that order and get a one-line hover; the synthetic row is
/// appended last with the full excluded breakdown as its hover. With `n` or
/// fewer distinct categories the table comes back without a synthetic row.
pub fn bucket_top_n(counts: &[CategoryCount], n: usize) -> BucketedTable {
    let (kept, excluded) = counts.split_at(n.min(counts.len()));

    let mut rows: Vec<BucketedRow> = kept
        .iter()
        .map(|c| BucketedRow {
            label: c.category.clone(),
            count: c.count,
            hover_text: incident_hover(&c.category, c.count),
            is_others: false,
        })
        .collect();

    if excluded.is_empty() {
        return BucketedTable {
            rows,
            others_detail: None,
        };
    }

    let detail = excluded
        .iter()
        .map(|c| incident_hover(&c.category, c.count))
        .collect::<Vec<_>>()
        .join("\n");
    let total: i64 = excluded.iter().map(|c| c.count).sum();

    rows.push(BucketedRow {
        label: others_label(excluded.len()),
        count: total,
        hover_text: detail.clone(),
        is_others: true,
    });

    BucketedTable {
        rows,
        others_detail: Some(detail),
    }
}

/// Grouped-series variant for separate mode: keeps the top `n` rows and sums
/// each group's remainder into one appended others row.
pub fn bucket_top_n_grouped(counts: &[GroupedCount], n: usize) -> Vec<GroupedCount> {
    let (kept, excluded) = counts.split_at(n.min(counts.len()));
    let mut rows = kept.to_vec();

    if !excluded.is_empty() {
        rows.push(GroupedCount {
            category: others_label(excluded.len()),
            provoked: excluded.iter().map(|c| c.provoked).sum(),
            unprovoked: excluded.iter().map(|c| c.unprovoked).sum(),
        });
    }
    rows
}
