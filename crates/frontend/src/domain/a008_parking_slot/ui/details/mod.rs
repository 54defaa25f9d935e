use crate::shared::detail::{EntityDetails, FieldsFn};
use contracts::domain::a008_parking_slot::ParkingSlot;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn fields(s: &ParkingSlot) -> Vec<(&'static str, String)> {
    vec![
        ("Slot", s.slot_number.clone()),
        ("Vehicle", s.vehicle_type.clone()),
        ("Parking area id", s.parking_area_id.clone()),
        ("Created", s.timestamps.created_display()),
    ]
}

#[component]
pub fn ParkingSlotDetails(
    id: String,
    tab_key: String,
    nav: Option<NavigationContext>,
) -> impl IntoView {
    let fields: FieldsFn<ParkingSlot> = fields;
    view! { <EntityDetails id=id tab_key=tab_key nav=nav fields=fields /> }
}
