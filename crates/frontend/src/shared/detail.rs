//! Общий экран деталей записи
//!
//! Header and breadcrumbs come from the navigation context the tab was
//! opened with. Without one (reload, direct key) the record is fetched by
//! id and a fresh context is built from it.

use crate::layout::global_context::use_tabs;
use crate::layout::tabs::tab_label_for_route;
use crate::shared::components::page_header::PageHeader;
use crate::shared::http_api::HttpResourceApi;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_DETAIL};
use crate::shared::resource_list::{Resource, UiInteraction};
use contracts::shared::listing::{Interaction, Notice, ResourceApi};
use contracts::shared::navigation::{
    consume_context, fallback_for, resolve_detail, round_trip, DetailOutcome, Fallback,
    NavigationContext, Received, Route,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Label/value pairs of the field card
pub type FieldsFn<T> = fn(&T) -> Vec<(&'static str, String)>;

/// Embedded child list, rendered once a context exists
pub type ChildFn = fn(NavigationContext) -> AnyView;

/// "Provinces › Western › Colombo"
pub fn breadcrumb_trail(context: &NavigationContext) -> Vec<String> {
    let root = context
        .ancestors
        .first()
        .map(|crumb| crumb.entity.resource)
        .unwrap_or(context.parent.resource);
    std::iter::once(root.list_name().to_string())
        .chain(context.ancestors.iter().map(|crumb| crumb.entity.label.clone()))
        .chain(std::iter::once(context.parent.label.clone()))
        .collect()
}

#[component]
pub fn EntityDetails<T>(
    id: String,
    tab_key: String,
    nav: Option<NavigationContext>,
    fields: FieldsFn<T>,
    #[prop(optional_no_strip)] child: Option<ChildFn>,
) -> impl IntoView
where
    T: Resource,
{
    let kind = T::kind();
    let route = Route::detail(kind, id.clone());
    let tabs = use_tabs();
    let ui = UiInteraction::from_context();

    let received = consume_context(nav, &route);
    let context: RwSignal<Option<NavigationContext>> = RwSignal::new(match &received {
        Received::Present(ctx) => Some(ctx.clone()),
        Received::Absent => None,
    });
    let entity: RwSignal<Option<T>> = RwSignal::new(None);
    let load_error: RwSignal<Option<String>> = RwSignal::new(None);
    let tab_key = StoredValue::new(tab_key);

    match fallback_for(kind, &id) {
        Fallback::Redirect(list) => {
            log::warn!("{} detail without id, redirecting to list", kind.key());
            spawn_local(async move {
                tabs.replace_tab(&tab_key.get_value(), list, None);
            });
        }
        Fallback::Refetch { id, .. } => {
            if received == Received::Absent {
                log::debug!("{} {} opened without context, refetching", kind.key(), id);
            }
            let route = route.clone();
            spawn_local(async move {
                let fetched = HttpResourceApi::<T>::new().fetch(&id).await;
                if let Err(err) = &fetched {
                    log::warn!("failed to load {} {}: {}", kind.key(), id, err);
                    ui.notify(Notice::error(err.user_message()));
                }
                match resolve_detail(&received, fetched) {
                    DetailOutcome::Show { record, rebuilt } => {
                        if let Some(ctx) = rebuilt {
                            let _ = context.try_set(Some(ctx));
                        }
                        let title = tab_label_for_route(&route, Some(record.label()));
                        tabs.update_tab_title(&tab_key.get_value(), &title);
                        let _ = entity.try_set(Some(record));
                    }
                    DetailOutcome::SessionExpired(_) => ui.session_expired(),
                    DetailOutcome::RedirectToList { route, .. } => {
                        tabs.replace_tab(&tab_key.get_value(), route, None);
                    }
                    DetailOutcome::ShowError(err) => {
                        let _ = load_error.try_set(Some(err.user_message()));
                    }
                }
            });
        }
    }

    let go_back = Callback::new(move |_: ()| {
        let (target, back_context) = match context.get_untracked() {
            Some(ctx) => {
                let back = round_trip(&ctx);
                (back.route, back.context)
            }
            None => (Route::list(kind), None),
        };
        tabs.replace_tab(&tab_key.get_value(), target, back_context);
    });

    let title = Signal::derive(move || {
        context
            .with(|ctx| ctx.as_ref().map(|c| c.parent.label.clone()))
            .or_else(|| entity.with(|e| e.as_ref().map(|e| e.label().to_string())))
            .unwrap_or_else(|| "Loading...".to_string())
    });

    let breadcrumbs = move || {
        context.get().map(|ctx| {
            let trail = breadcrumb_trail(&ctx);
            let last = trail.len().saturating_sub(1);
            view! {
                <nav class="breadcrumbs">
                    {trail.into_iter().enumerate().map(|(i, crumb)| view! {
                        <span class={if i == last { "breadcrumbs__item breadcrumbs__item--current" } else { "breadcrumbs__item" }}>
                            {crumb}
                        </span>
                        {(i < last).then(|| view! { <span class="breadcrumbs__sep">"›"</span> })}
                    }).collect_view()}
                </nav>
            }
        })
    };

    let field_card = move || {
        if let Some(message) = load_error.get() {
            return view! { <div class="alert alert--error">{message}</div> }.into_any();
        }
        entity.with(|record| match record {
            Some(record) => {
                let active = record.is_active();
                let rows = fields(record)
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="details__row">
                            <span class="details__label">{label}</span>
                            <span class="details__value">{value}</span>
                        </div>
                    })
                    .collect_view();
                view! {
                    <div class="details__card">
                        {rows}
                        <div class="details__row">
                            <span class="details__label">"Status"</span>
                            <span class="details__value">
                                {if active {
                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge> }.into_any()
                                } else {
                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Inactive"</Badge> }.into_any()
                                }}
                            </span>
                        </div>
                    </div>
                }
                .into_any()
            }
            None => view! { <div class="details__card details__card--loading">"Loading..."</div> }.into_any(),
        })
    };

    let child_list = move || {
        let render = child?;
        context.get().map(render)
    };

    view! {
        <PageFrame page_id=page_id(kind.key(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <PageHeader title=title subtitle=kind.element_name().to_string() on_back=go_back />
            <div class="page__content">
                {breadcrumbs}
                {field_card}
                {child_list}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_province::Province;
    use contracts::domain::a002_district::District;
    use contracts::domain::a003_city::City;
    use contracts::shared::navigation::{build_context, descend};

    #[test]
    fn trail_starts_at_the_root_list() {
        let province = Province {
            id: "p1".into(),
            name: "Western".into(),
            is_active: true,
            ..Province::default()
        };
        let district = District {
            id: "d1".into(),
            name: "Colombo".into(),
            province_id: "p1".into(),
            is_active: true,
            ..District::default()
        };
        let city = City {
            id: "c1".into(),
            name: "Dehiwala".into(),
            district_id: "d1".into(),
            is_active: true,
            ..City::default()
        };

        let top = build_context(&province, vec![], true);
        assert_eq!(breadcrumb_trail(&top), vec!["Provinces", "Western"]);

        let nested = descend(&descend(&top, &district, true), &city, false);
        assert_eq!(
            breadcrumb_trail(&nested),
            vec!["Provinces", "Western", "Colombo", "Dehiwala"]
        );
    }
}
