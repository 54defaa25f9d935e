use crate::shared::resource_list::{Column, EditableList};
use contracts::domain::a008_parking_slot::ParkingSlot;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn columns() -> Vec<Column<ParkingSlot>> {
    vec![Column::new("Vehicle", 100.0, |s: &ParkingSlot| {
        s.vehicle_type.clone()
    })]
}

#[component]
pub fn ParkingSlotList(
    #[prop(optional_no_strip)] status_filter: Option<bool>,
    #[prop(optional_no_strip)] parent: Option<NavigationContext>,
) -> impl IntoView {
    view! {
        <EditableList
            columns=columns()
            status_filter=status_filter
            parent=parent
            name_title=Some("Slot")
        />
    }
}
