//! TopHeader component - application top navigation bar.

use crate::layout::global_context::use_tabs;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_tabs();

    let is_sidebar_visible = move || ctx.left_open.get();
    let open_tabs = move || ctx.opened.with(|tabs| tabs.len());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"FindMySpot Admin"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__hint">
                    {move || match open_tabs() {
                        0 => String::new(),
                        1 => "1 tab open".to_string(),
                        n => format!("{n} tabs open"),
                    }}
                </span>
            </div>
        </div>
    }
}
