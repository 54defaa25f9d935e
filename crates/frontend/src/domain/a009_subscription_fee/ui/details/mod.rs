use crate::shared::detail::{EntityDetails, FieldsFn};
use contracts::domain::a009_subscription_fee::SubscriptionFee;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;

fn fields(f: &SubscriptionFee) -> Vec<(&'static str, String)> {
    vec![
        ("Plan", f.plan_name.clone()),
        ("Amount", f.amount_display()),
        ("Duration", format!("{} days", f.duration_days)),
        ("Created", f.timestamps.created_display()),
    ]
}

#[component]
pub fn SubscriptionFeeDetails(
    id: String,
    tab_key: String,
    nav: Option<NavigationContext>,
) -> impl IntoView {
    let fields: FieldsFn<SubscriptionFee> = fields;
    view! { <EntityDetails id=id tab_key=tab_key nav=nav fields=fields /> }
}
