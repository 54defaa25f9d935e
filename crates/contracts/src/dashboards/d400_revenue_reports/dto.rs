use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Вид отчёта (сегмент пути `/v1/reports/{kind}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    RevenueByRegion,
    RevenueByOwner,
    SubscriptionPayments,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::RevenueByRegion,
        ReportKind::RevenueByOwner,
        ReportKind::SubscriptionPayments,
    ];

    pub fn path(self) -> &'static str {
        match self {
            ReportKind::RevenueByRegion => "revenue-by-region",
            ReportKind::RevenueByOwner => "revenue-by-owner",
            ReportKind::SubscriptionPayments => "subscription-payments",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.path() == path)
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::RevenueByRegion => "Revenue by region",
            ReportKind::RevenueByOwner => "Revenue by owner",
            ReportKind::SubscriptionPayments => "Subscription payments",
        }
    }

    /// Header of the label column
    pub fn label_header(self) -> &'static str {
        match self {
            ReportKind::RevenueByRegion => "Province",
            ReportKind::RevenueByOwner => "Parking owner",
            ReportKind::SubscriptionPayments => "Plan",
        }
    }
}

/// Query string `?dateFrom=YYYY-MM-DD&dateTo=YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    #[serde(rename = "dateFrom")]
    pub date_from: String,
    #[serde(rename = "dateTo")]
    pub date_to: String,
}

impl ReportQuery {
    /// Whole calendar month. `None` for an invalid month.
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let last = next.pred_opt()?;
        Some(Self {
            date_from: first.format("%Y-%m-%d").to_string(),
            date_to: last.format("%Y-%m-%d").to_string(),
        })
    }

    /// "YYYY-MM" of `date_from`
    pub fn period(&self) -> String {
        NaiveDate::parse_from_str(&self.date_from, "%Y-%m-%d")
            .map(|d| format!("{:04}-{:02}", d.year(), d.month()))
            .unwrap_or_else(|_| self.date_from.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    #[serde(default)]
    pub transactions: u64,
    #[serde(default)]
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub kind: ReportKind,
    #[serde(rename = "dateFrom")]
    pub date_from: String,
    #[serde(rename = "dateTo")]
    pub date_to: String,
    #[serde(default)]
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportTotals {
    pub transactions: u64,
    pub amount: f64,
}

impl ReportResponse {
    pub fn totals(&self) -> ReportTotals {
        self.rows.iter().fold(ReportTotals::default(), |acc, row| ReportTotals {
            transactions: acc.transactions + row.transactions,
            amount: acc.amount + row.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn month_bounds() {
        let feb = ReportQuery::for_month(2024, 2).unwrap();
        assert_eq!(feb.date_from, "2024-02-01");
        assert_eq!(feb.date_to, "2024-02-29");
        let dec = ReportQuery::for_month(2023, 12).unwrap();
        assert_eq!(dec.date_to, "2023-12-31");
        assert_eq!(dec.period(), "2023-12");
        assert!(ReportQuery::for_month(2024, 13).is_none());
    }

    #[test]
    fn kind_paths() {
        for kind in ReportKind::ALL {
            assert_eq!(ReportKind::from_path(kind.path()), Some(kind));
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.path()));
        }
    }

    #[test]
    fn totals_sum_rows() {
        let response: ReportResponse = serde_json::from_value(json!({
            "kind": "revenue-by-region",
            "dateFrom": "2024-05-01",
            "dateTo": "2024-05-31",
            "rows": [
                { "label": "Western", "transactions": 120, "amount": 54000.5 },
                { "label": "Central", "transactions": 30, "amount": 9999.5 }
            ]
        }))
        .unwrap();
        let totals = response.totals();
        assert_eq!(totals.transactions, 150);
        assert!((totals.amount - 64000.0).abs() < 1e-9);
    }

    #[test]
    fn empty_report_totals_zero() {
        let response: ReportResponse = serde_json::from_value(json!({
            "kind": "subscription-payments",
            "dateFrom": "2024-05-01",
            "dateTo": "2024-05-31"
        }))
        .unwrap();
        assert_eq!(response.totals(), ReportTotals::default());
    }
}
