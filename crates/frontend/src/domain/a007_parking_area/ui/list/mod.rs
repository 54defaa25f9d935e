use crate::shared::resource_list::{Column, EditableList};
use contracts::domain::a007_parking_area::ParkingArea;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn columns() -> Vec<Column<ParkingArea>> {
    vec![
        Column::new("Address", 220.0, |a: &ParkingArea| a.address.clone()),
        Column::new("Capacity", 80.0, |a: &ParkingArea| a.capacity.to_string()),
    ]
}

#[component]
pub fn ParkingAreaList(
    #[prop(optional_no_strip)] status_filter: Option<bool>,
    #[prop(optional_no_strip)] parent: Option<NavigationContext>,
) -> impl IntoView {
    view! { <EditableList columns=columns() status_filter=status_filter parent=parent /> }
}
