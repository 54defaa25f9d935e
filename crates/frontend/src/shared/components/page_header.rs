use crate::shared::icons::icon;
use leptos::prelude::*;

/// Заголовок страницы: название, подзаголовок, кнопки справа
///
/// `on_back` adds an arrow button before the title (detail pages).
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional)] on_back: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {on_back.map(|back| view! {
                    <button class="page__back" title="Back" on:click=move |_| back.run(())>
                        {icon("arrow-left")}
                    </button>
                })}
                <div class="page__header-text">
                    <h1 class="page__title">{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page__header-right">{children.map(|c| c())}</div>
        </div>
    }
}
