use crate::domain::a002_district::ui::list::DistrictList;
use crate::shared::detail::{ChildFn, EntityDetails, FieldsFn};
use contracts::domain::a001_province::Province;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn fields(p: &Province) -> Vec<(&'static str, String)> {
    vec![
        ("Name", p.name.clone()),
        ("Created", p.timestamps.created_display()),
    ]
}

fn districts(ctx: NavigationContext) -> AnyView {
    view! { <DistrictList parent=Some(ctx) /> }.into_any()
}

/// Провинция и её районы
#[component]
pub fn ProvinceDetails(
    id: String,
    tab_key: String,
    nav: Option<NavigationContext>,
) -> impl IntoView {
    let fields: FieldsFn<Province> = fields;
    let child: ChildFn = districts;
    view! { <EntityDetails id=id tab_key=tab_key nav=nav fields=fields child=Some(child) /> }
}
