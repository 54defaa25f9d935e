use crate::domain::a003_city::ui::list::CityList;
use crate::shared::detail::{ChildFn, EntityDetails, FieldsFn};
use contracts::domain::a002_district::District;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn fields(d: &District) -> Vec<(&'static str, String)> {
    vec![
        ("Name", d.name.clone()),
        ("Province id", d.province_id.clone()),
        ("Created", d.timestamps.created_display()),
    ]
}

fn cities(ctx: NavigationContext) -> AnyView {
    view! { <CityList parent=Some(ctx) /> }.into_any()
}

#[component]
pub fn DistrictDetails(
    id: String,
    tab_key: String,
    nav: Option<NavigationContext>,
) -> impl IntoView {
    let fields: FieldsFn<District> = fields;
    let child: ChildFn = cities;
    view! { <EntityDetails id=id tab_key=tab_key nav=nav fields=fields child=Some(child) /> }
}
