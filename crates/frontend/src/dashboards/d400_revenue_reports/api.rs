use crate::shared::api_utils::api_url;
use crate::shared::http_api::get_json;
use contracts::dashboards::d400_revenue_reports::{ReportKind, ReportQuery, ReportResponse};
use contracts::shared::api_error::ApiError;

/// `reports/{kind}?dateFrom=..&dateTo=..`, relative to the versioned base
pub fn report_path(kind: ReportKind, query: &ReportQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(format!("reports/{}?{}", kind.path(), qs))
}

/// Получить отчёт за период
pub async fn fetch_report(kind: ReportKind, query: &ReportQuery) -> Result<ReportResponse, ApiError> {
    let url = api_url(&report_path(kind, query)?);
    let body = get_json(&url).await?;
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_uses_wire_names() {
        let query = ReportQuery::for_month(2026, 2).unwrap();
        assert_eq!(
            report_path(ReportKind::RevenueByOwner, &query).unwrap(),
            "reports/revenue-by-owner?dateFrom=2026-02-01&dateTo=2026-02-28"
        );
    }
}
