//! Содержимое одного открытого таба

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use contracts::shared::navigation::Route;
use leptos::logging::log;
use leptos::prelude::*;

/// Hidden tabs stay mounted: a list keeps its filters and page while the
/// user works in another tab. Content is built once, from the route and
/// navigation context the tab was opened with.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let visible = Memo::new(move |_| {
        tabs_store
            .active
            .with(|active| active.as_deref() == Some(key.get_value().as_str()))
    });

    let kind = match &tab.route {
        Some(Route::Detail { .. }) => "detail",
        Some(Route::List { .. }) => "list",
        Some(Route::Reports) => "dashboard",
        None => "unknown",
    };
    log!(
        "mount tab {} ({kind}, context {})",
        tab.key,
        if tab.nav.is_some() { "handed over" } else { "none" }
    );
    on_cleanup(move || log!("unmount tab {}", key.get_value()));

    let content = render_tab_content(&tab);

    view! {
        <section
            class="tabs__item"
            class:tabs__item--hidden=move || !visible.get()
            data-tab-key=tab.key
            data-route-kind=kind
        >
            {content}
        </section>
    }
}
