use crate::dashboards::d400_revenue_reports::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::session::use_session;
use chrono::{Datelike, Utc};
use contracts::dashboards::d400_revenue_reports::{ReportKind, ReportQuery, ReportState};
use contracts::shared::navigation::REPORTS_KEY;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// "2026-10" -> (2026, 10)
fn parse_period(period: &str) -> Option<(i32, u32)> {
    let (year, month) = period.split_once('-')?;
    let year = year.parse().ok()?;
    let month = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

fn format_amount(amount: f64) -> String {
    format!("LKR {:.2}", amount)
}

/// Отчёты по выручке за месяц
#[component]
pub fn RevenueReportsDashboard() -> impl IntoView {
    let notices = use_notifications();
    let session = use_session();

    let now = Utc::now().date_naive();
    let kind = RwSignal::new(ReportKind::RevenueByRegion);
    let period = RwSignal::new(format!("{:04}-{:02}", now.year(), now.month()));
    let state = RwSignal::new(ReportState::default());
    let loading = Signal::derive(move || state.with(|s| s.loading));
    // Bumped by the refresh button
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        let kind = kind.get();
        let period = period.get();
        reload.track();

        let Some(query) = parse_period(&period).and_then(|(y, m)| ReportQuery::for_month(y, m)) else {
            state.update(|s| s.reject(format!("Invalid month: {period}")));
            return;
        };
        let ticket = state.try_update(|s| s.begin_load());

        spawn_local(async move {
            let Some(ticket) = ticket else {
                return;
            };
            let result = match api::fetch_report(kind, &query).await {
                Ok(response) => {
                    log::debug!("{} {}: {} rows", kind.path(), query.period(), response.rows.len());
                    Ok(response)
                }
                Err(err) => {
                    log::warn!("report {} failed: {}", kind.path(), err);
                    notices.error(err.user_message());
                    if err.is_auth() {
                        session.expire();
                    }
                    Err(err.user_message())
                }
            };
            let applied = state.try_update(|s| s.finish_load(ticket, result));
            if applied == Some(false) {
                log::warn!("dropped outdated {} report for {}", kind.path(), query.period());
            }
        });
    });

    let rows = move || {
        let Some(report) = state.with(|s| s.data.clone()) else {
            return view! {
                <TableRow>
                    <TableCell attr:colspan="3">
                        <div class="table__empty">
                            {move || if loading.get() { "Loading..." } else { "No data" }}
                        </div>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        };
        let totals = report.totals();
        let body = report
            .rows
            .into_iter()
            .map(|row| view! {
                <TableRow>
                    <TableCell><TableCellLayout truncate=true>{row.label}</TableCellLayout></TableCell>
                    <TableCell class="table__cell--right">{row.transactions.to_string()}</TableCell>
                    <TableCell class="table__cell--right">{format_amount(row.amount)}</TableCell>
                </TableRow>
            })
            .collect_view();
        view! {
            {body}
            <tr class="table__totals-row">
                <td>"Total"</td>
                <td class="table__cell--right">{totals.transactions.to_string()}</td>
                <td class="table__cell--right">{format_amount(totals.amount)}</td>
            </tr>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id=page_id(REPORTS_KEY, PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <PageHeader title=Signal::derive(move || kind.get().title().to_string())>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload.update(|n| *n += 1)
                    disabled=loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("bar-chart")}
                            <select
                                class="status-select"
                                prop:value=move || kind.get().path()
                                on:change=move |ev| {
                                    if let Some(k) = ReportKind::from_path(&event_target_value(&ev)) {
                                        kind.set(k);
                                    }
                                }
                            >
                                {ReportKind::ALL.into_iter().map(|k| view! {
                                    <option value=k.path()>{k.title()}</option>
                                }).collect_view()}
                            </select>
                            <input
                                type="month"
                                class="month-input"
                                prop:value=move || period.get()
                                on:change=move |ev| period.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>

                {move || state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=200.0>{move || kind.get().label_header()}</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Transactions"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Amount"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_input_values() {
        assert_eq!(parse_period("2026-10"), Some((2026, 10)));
        assert_eq!(parse_period("2026-13"), None);
        assert_eq!(parse_period(""), None);
    }

    #[test]
    fn amounts_in_rupees() {
        assert_eq!(format_amount(1250.5), "LKR 1250.50");
    }
}
