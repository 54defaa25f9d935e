use crate::domain::a007_parking_area::ui::list::ParkingAreaList;
use crate::shared::detail::{ChildFn, EntityDetails, FieldsFn};
use contracts::domain::a003_city::City;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn fields(c: &City) -> Vec<(&'static str, String)> {
    vec![
        ("Name", c.name.clone()),
        ("Postal code", c.postal_code.clone().unwrap_or_else(|| "-".into())),
        ("District id", c.district_id.clone()),
        ("Created", c.timestamps.created_display()),
    ]
}

fn parking_areas(ctx: NavigationContext) -> AnyView {
    view! { <ParkingAreaList parent=Some(ctx) /> }.into_any()
}

/// Город и парковки в нём
#[component]
pub fn CityDetails(id: String, tab_key: String, nav: Option<NavigationContext>) -> impl IntoView {
    let fields: FieldsFn<City> = fields;
    let child: ChildFn = parking_areas;
    view! { <EntityDetails id=id tab_key=tab_key nav=nav fields=fields child=Some(child) /> }
}
