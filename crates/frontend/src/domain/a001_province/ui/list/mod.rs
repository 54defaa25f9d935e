use crate::shared::resource_list::{Column, EditableList};
use contracts::domain::a001_province::Province;
use leptos::prelude::*;

fn columns() -> Vec<Column<Province>> {
    vec![Column::new("Created", 140.0, |p: &Province| {
        p.timestamps.created_display()
    })]
}

#[component]
pub fn ProvinceList(#[prop(optional_no_strip)] status_filter: Option<bool>) -> impl IntoView {
    view! { <EditableList columns=columns() status_filter=status_filter /> }
}
