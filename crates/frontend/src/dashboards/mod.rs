pub mod d400_revenue_reports;

pub use d400_revenue_reports::ui::RevenueReportsDashboard;
