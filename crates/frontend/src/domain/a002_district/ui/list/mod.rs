use crate::shared::resource_list::{Column, EditableList};
use contracts::domain::a002_district::District;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn columns() -> Vec<Column<District>> {
    vec![Column::new("Created", 140.0, |d: &District| {
        d.timestamps.created_display()
    })]
}

/// Districts; inside a province screen only that province's ones
#[component]
pub fn DistrictList(
    #[prop(optional_no_strip)] status_filter: Option<bool>,
    #[prop(optional_no_strip)] parent: Option<NavigationContext>,
) -> impl IntoView {
    view! { <EditableList columns=columns() status_filter=status_filter parent=parent /> }
}
