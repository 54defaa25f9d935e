use crate::domain::a008_parking_slot::ui::list::ParkingSlotList;
use crate::shared::detail::{ChildFn, EntityDetails, FieldsFn};
use contracts::domain::a007_parking_area::ParkingArea;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn fields(a: &ParkingArea) -> Vec<(&'static str, String)> {
    vec![
        ("Name", a.name.clone()),
        ("Address", a.address.clone()),
        ("Capacity", a.capacity.to_string()),
        ("City id", a.city_id.clone()),
        ("Owner id", a.owner_id.clone().unwrap_or_else(|| "-".into())),
        ("Created", a.timestamps.created_display()),
    ]
}

fn slots(ctx: NavigationContext) -> AnyView {
    view! { <ParkingSlotList parent=Some(ctx) /> }.into_any()
}

#[component]
pub fn ParkingAreaDetails(
    id: String,
    tab_key: String,
    nav: Option<NavigationContext>,
) -> impl IntoView {
    let fields: FieldsFn<ParkingArea> = fields;
    let child: ChildFn = slots;
    view! { <EntityDetails id=id tab_key=tab_key nav=nav fields=fields child=Some(child) /> }
}
