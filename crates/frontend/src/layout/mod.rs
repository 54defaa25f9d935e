pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use center::tabs::Tabs;
use global_context::use_tabs;
use leptos::prelude::*;
use left::sidebar::Sidebar;
use top_header::TopHeader;

/// Рабочее место администратора
///
/// ```text
/// +----------------------------------+
/// | TopHeader (brand, sidebar toggle)|
/// +---------+------------------------+
/// | Sidebar | open tabs, one visible |
/// +---------+------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let tabs_store = use_tabs();
    let sidebar_hidden = move || !tabs_store.left_open.get();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside data-zone="left" class="left" class:hidden=sidebar_hidden>
                    <Sidebar />
                </aside>
                <main data-zone="center" class="app-main app-tabs">
                    <Tabs />
                </main>
            </div>
        </div>
    }
}
