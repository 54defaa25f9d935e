pub mod d400_revenue_reports;
