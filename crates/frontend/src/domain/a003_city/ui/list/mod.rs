use crate::shared::resource_list::{Column, EditableList};
use contracts::domain::a003_city::City;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn columns() -> Vec<Column<City>> {
    vec![
        Column::new("Postal code", 110.0, |c: &City| {
            c.postal_code.clone().unwrap_or_else(|| "-".into())
        }),
        Column::new("Created", 140.0, |c: &City| c.timestamps.created_display()),
    ]
}

#[component]
pub fn CityList(
    #[prop(optional_no_strip)] status_filter: Option<bool>,
    #[prop(optional_no_strip)] parent: Option<NavigationContext>,
) -> impl IntoView {
    view! { <EditableList columns=columns() status_filter=status_filter parent=parent /> }
}
