use crate::layout::global_context::{use_tabs, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Middle mouse button
const AUX_CLOSE_BUTTON: i16 = 1;

/// Заголовок таба в полосе табов
///
/// Click activates, the cross or a middle click closes.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = use_tabs();
    let key = StoredValue::new(tab.key.clone());

    let is_active =
        Memo::new(move |_| tabs_store.active.with(|a| a.as_deref() == Some(key.get_value().as_str())));

    let close = move || tabs_store.close_tab(&key.get_value());

    let title_attr = tab.title.clone();

    view! {
        <div
            class="tab"
            class:active=is_active
            title=title_attr
            on:click=move |_| tabs_store.activate_tab(&key.get_value())
            on:auxclick=move |ev: ev::MouseEvent| {
                if ev.button() == AUX_CLOSE_BUTTON {
                    ev.prevent_default();
                    close();
                }
            }
        >
            <span class="tab__title">{tab.title}</span>
            <button
                class="tab-close"
                aria-label="Close tab"
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    close();
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
