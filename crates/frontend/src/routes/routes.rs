use crate::layout::global_context::use_tabs;
use crate::layout::Shell;
use crate::system::pages::session_expired::SessionExpiredPage;
use crate::system::session::use_session;
use leptos::prelude::*;

/// Рабочее место или экран истёкшей сессии
///
/// Open tabs survive while the session page is shown, since the tab
/// store lives in the app context rather than under the shell.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    // `?active=` reopens one tab, without navigation context
    use_tabs().init_router_integration();

    view! {
        <Show
            when=move || !session.expired.get()
            fallback=|| view! { <SessionExpiredPage /> }
        >
            <Shell />
        </Show>
    }
}
