mod dashboard;

pub use dashboard::RevenueReportsDashboard;
