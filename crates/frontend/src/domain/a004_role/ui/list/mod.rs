use crate::shared::resource_list::{Column, EditableList};
use contracts::domain::a004_role::Role;
use leptos::prelude::*;

fn columns() -> Vec<Column<Role>> {
    vec![
        Column::new("Description", 200.0, |r: &Role| r.description.clone()),
        Column::new("Permissions", 200.0, |r: &Role| r.permissions_display()),
    ]
}

#[component]
pub fn RoleList(#[prop(optional_no_strip)] status_filter: Option<bool>) -> impl IntoView {
    view! { <EditableList columns=columns() status_filter=status_filter /> }
}
