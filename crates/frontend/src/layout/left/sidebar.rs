//! Sidebar component with collapsible menu groups

use crate::layout::global_context::use_tabs;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use contracts::domain::common::ResourceKind;
use contracts::shared::navigation::REPORTS_KEY;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "locations",
            label: "Locations",
            icon: "map",
            items: vec![
                (ResourceKind::Province.key(), "map"),
                (ResourceKind::District.key(), "map-pin"),
                (ResourceKind::City.key(), "building"),
            ],
        },
        MenuGroup {
            id: "parking",
            label: "Parking",
            icon: "parking",
            items: vec![
                (ResourceKind::ParkingOwner.key(), "user-check"),
                (ResourceKind::ParkingArea.key(), "parking"),
                (ResourceKind::ParkingSlot.key(), "grid"),
                (ResourceKind::SubscriptionFee.key(), "credit-card"),
            ],
        },
        MenuGroup {
            id: "people",
            label: "Users",
            icon: "users",
            items: vec![
                (ResourceKind::Customer.key(), "users"),
                (ResourceKind::Role.key(), "shield"),
            ],
        },
        MenuGroup {
            id: "reports",
            label: "Reports",
            icon: "bar-chart",
            items: vec![(REPORTS_KEY, "bar-chart")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_tabs();

    let expanded_groups = RwSignal::new(vec!["locations".to_string(), "parking".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let group_id_for_exp = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(key, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_key(key)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{tab_label_for_key(key)}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
