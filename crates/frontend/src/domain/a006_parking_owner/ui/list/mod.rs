use crate::shared::resource_list::{Column, ResourceList, RowExtra};
use contracts::domain::a006_parking_owner::ParkingOwner;
use contracts::shared::listing::RowAction;
use leptos::prelude::*;

fn columns() -> Vec<Column<ParkingOwner>> {
    vec![
        Column::new("Email", 200.0, |o: &ParkingOwner| o.email.clone()),
        Column::new("NIC", 120.0, |o: &ParkingOwner| {
            o.nic.clone().unwrap_or_else(|| "-".into())
        }),
        Column::new("Approval", 100.0, |o: &ParkingOwner| {
            o.approval_status.display().to_string()
        }),
    ]
}

/// "Approve" appears for pending owners only
fn approve() -> RowExtra<ParkingOwner> {
    RowExtra {
        label: "Approve",
        icon: "check",
        action: RowAction::Approve,
        visible: ParkingOwner::is_pending,
    }
}

#[component]
pub fn ParkingOwnerList(#[prop(optional_no_strip)] status_filter: Option<bool>) -> impl IntoView {
    view! { <ResourceList columns=columns() status_filter=status_filter extra=Some(approve()) /> }
}
