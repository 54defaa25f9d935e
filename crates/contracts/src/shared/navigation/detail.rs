//! Решение экрана деталей после загрузки записи

use super::context::{build_context, NavigationContext, Received};
use super::route::Route;
use crate::domain::common::Listable;
use crate::shared::api_error::ApiError;

/// What the detail screen does once the fetch by id settles
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome<T> {
    /// Show the record. `rebuilt` is the root-level context made for a
    /// screen entered without one.
    Show {
        record: T,
        rebuilt: Option<NavigationContext>,
    },
    /// Context is known, so the screen stays and shows the error inline
    ShowError(ApiError),
    /// No context and no record: replace the tab with the list
    RedirectToList { route: Route, error: ApiError },
    /// 401/403
    SessionExpired(ApiError),
}

pub fn resolve_detail<T: Listable>(
    received: &Received,
    fetched: Result<T, ApiError>,
) -> DetailOutcome<T> {
    match (fetched, received) {
        (Ok(record), Received::Present(_)) => DetailOutcome::Show {
            record,
            rebuilt: None,
        },
        (Ok(record), Received::Absent) => {
            let rebuilt = build_context(&record, Vec::new(), true);
            DetailOutcome::Show {
                record,
                rebuilt: Some(rebuilt),
            }
        }
        (Err(error), _) if error.is_auth() => DetailOutcome::SessionExpired(error),
        (Err(error), Received::Present(_)) => DetailOutcome::ShowError(error),
        (Err(error), Received::Absent) => DetailOutcome::RedirectToList {
            route: Route::list(T::kind()),
            error,
        },
    }
}
