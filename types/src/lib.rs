pub mod formatting;
pub mod selection;
pub mod series;

// Re-exports for convenience
pub use selection::{Grouping, ProvokedFilter, Selection};
pub use series::{
    BucketedRow, BucketedTable, CategoryCount, ChartData, ChartKind, ChartPayload, GroupedCount,
    GroupedYearCount, YearCount,
};
