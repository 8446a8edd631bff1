pub mod config;
pub mod dataset;
pub mod error;
pub mod query;
pub mod reconcile;
pub mod session;

// Re-exports for convenience
pub use config::{Dashboard, DashboardConfig};
pub use dataset::{Column, FilteredView, IncidentRecord, IncidentTable, load_table};
pub use error::Error;
pub use query::{UpdateOutput, render_update};
pub use reconcile::{Trigger, UpdateInput, reconcile};
pub use session::SessionState;
