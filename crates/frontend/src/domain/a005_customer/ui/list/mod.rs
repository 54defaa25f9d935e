use crate::shared::resource_list::{Column, ResourceList};
use contracts::domain::a005_customer::Customer;
use leptos::prelude::*;

fn columns() -> Vec<Column<Customer>> {
    vec![
        Column::new("Email", 200.0, |c: &Customer| c.email.clone()),
        Column::new("Mobile", 120.0, |c: &Customer| {
            c.mobile.clone().unwrap_or_else(|| "-".into())
        }),
        Column::new("Registered", 140.0, |c: &Customer| {
            c.timestamps.created_display()
        }),
    ]
}

/// Customers sign up themselves; admins only (de)activate or delete them
#[component]
pub fn CustomerList(#[prop(optional_no_strip)] status_filter: Option<bool>) -> impl IntoView {
    view! { <ResourceList columns=columns() status_filter=status_filter /> }
}
