use crate::shared::resource_list::{Column, EditableList};
use contracts::domain::a009_subscription_fee::SubscriptionFee;
use leptos::prelude::*;

fn columns() -> Vec<Column<SubscriptionFee>> {
    vec![
        Column::new("Amount", 120.0, |f: &SubscriptionFee| f.amount_display()),
        Column::new("Days", 70.0, |f: &SubscriptionFee| f.duration_days.to_string()),
    ]
}

#[component]
pub fn SubscriptionFeeList(
    #[prop(optional_no_strip)] status_filter: Option<bool>,
) -> impl IntoView {
    view! { <EditableList columns=columns() status_filter=status_filter name_title=Some("Plan") /> }
}
