pub mod dto;
pub mod state;

pub use dto::{ReportKind, ReportQuery, ReportResponse, ReportRow, ReportTotals};
pub use state::ReportState;
