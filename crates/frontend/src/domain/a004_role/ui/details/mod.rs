use crate::shared::detail::{EntityDetails, FieldsFn};
use contracts::domain::a004_role::Role;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn fields(r: &Role) -> Vec<(&'static str, String)> {
    vec![
        ("Name", r.name.clone()),
        ("Description", r.description.clone()),
        ("Permissions", r.permissions_display()),
        ("Created", r.timestamps.created_display()),
    ]
}

#[component]
pub fn RoleDetails(id: String, tab_key: String, nav: Option<NavigationContext>) -> impl IntoView {
    let fields: FieldsFn<Role> = fields;
    view! { <EntityDetails id=id tab_key=tab_key nav=nav fields=fields /> }
}
