use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::system::session::SessionContext;
use leptos::prelude::*;

/// Корневой компонент: сервисы приложения и рабочее место
#[component]
pub fn App() -> impl IntoView {
    // Tab store, toasts and session state live above the shell so they
    // survive the session-expired screen.
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());
    provide_context(SessionContext::new());

    view! {
        <AppRoutes />
        <NotificationHost />
    }
}
