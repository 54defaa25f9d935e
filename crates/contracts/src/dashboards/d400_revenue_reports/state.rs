use super::dto::ReportResponse;
use crate::shared::listing::LoadTicket;

/// Состояние экрана отчёта
///
/// Only the latest request may land. A failed refresh keeps the rows of
/// the previous report on screen next to the error.
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    pub data: Option<ReportResponse>,
    pub error: Option<String>,
    pub loading: bool,
    generation: u64,
}

impl ReportState {
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket::issued(self.generation)
    }

    /// Invalid input: no request goes out, and anything in flight is outdated
    pub fn reject(&mut self, message: String) {
        self.generation += 1;
        self.loading = false;
        self.error = Some(message);
    }

    /// `false` when a newer request was issued meanwhile
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<ReportResponse, String>) -> bool {
        if ticket != LoadTicket::issued(self.generation) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(report) => {
                self.data = Some(report);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_revenue_reports::ReportKind;

    fn report(kind: ReportKind, month: &str) -> ReportResponse {
        ReportResponse {
            kind,
            date_from: format!("{month}-01"),
            date_to: format!("{month}-28"),
            rows: Vec::new(),
        }
    }

    #[test]
    fn slower_older_request_is_dropped() {
        let mut state = ReportState::default();
        let by_region = state.begin_load();
        let by_owner = state.begin_load();

        assert!(state.finish_load(by_owner, Ok(report(ReportKind::RevenueByOwner, "2026-09"))));
        assert!(!state.finish_load(by_region, Ok(report(ReportKind::RevenueByRegion, "2026-09"))));

        assert_eq!(state.data.map(|r| r.kind), Some(ReportKind::RevenueByOwner));
        assert!(!state.loading);
    }

    #[test]
    fn failed_refresh_keeps_previous_rows() {
        let mut state = ReportState::default();
        let first = state.begin_load();
        state.finish_load(first, Ok(report(ReportKind::RevenueByRegion, "2026-08")));

        let second = state.begin_load();
        assert!(state.finish_load(second, Err("Could not reach the server.".into())));

        assert_eq!(state.error.as_deref(), Some("Could not reach the server."));
        assert_eq!(state.data.map(|r| r.date_from), Some("2026-08-01".to_string()));
    }

    #[test]
    fn rejected_input_outdates_requests_in_flight() {
        let mut state = ReportState::default();
        let ticket = state.begin_load();
        state.reject("Invalid month: 2026-13".into());
        assert!(!state.finish_load(ticket, Ok(report(ReportKind::SubscriptionPayments, "2026-12"))));
        assert!(state.data.is_none());
        assert!(!state.loading);
    }
}
