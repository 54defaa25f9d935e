use crate::shared::detail::{EntityDetails, FieldsFn};
use contracts::domain::a006_parking_owner::ParkingOwner;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn fields(o: &ParkingOwner) -> Vec<(&'static str, String)> {
    vec![
        ("Name", o.name.clone()),
        ("Email", o.email.clone()),
        ("Mobile", o.mobile.clone().unwrap_or_else(|| "-".into())),
        ("NIC", o.nic.clone().unwrap_or_else(|| "-".into())),
        ("Approval", o.approval_status.display().to_string()),
        ("Registered", o.timestamps.created_display()),
    ]
}

#[component]
pub fn ParkingOwnerDetails(
    id: String,
    tab_key: String,
    nav: Option<NavigationContext>,
) -> impl IntoView {
    let fields: FieldsFn<ParkingOwner> = fields;
    view! { <EntityDetails id=id tab_key=tab_key nav=nav fields=fields /> }
}
