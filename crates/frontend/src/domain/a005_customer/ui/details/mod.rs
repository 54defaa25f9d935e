use crate::shared::detail::{EntityDetails, FieldsFn};
use contracts::domain::a005_customer::Customer;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn fields(c: &Customer) -> Vec<(&'static str, String)> {
    vec![
        ("Name", c.name.clone()),
        ("Email", c.email.clone()),
        ("Mobile", c.mobile.clone().unwrap_or_else(|| "-".into())),
        ("Role id", c.role_id.clone().unwrap_or_else(|| "-".into())),
        ("Registered", c.timestamps.created_display()),
    ]
}

#[component]
pub fn CustomerDetails(
    id: String,
    tab_key: String,
    nav: Option<NavigationContext>,
) -> impl IntoView {
    let fields: FieldsFn<Customer> = fields;
    view! { <EntityDetails id=id tab_key=tab_key nav=nav fields=fields /> }
}
