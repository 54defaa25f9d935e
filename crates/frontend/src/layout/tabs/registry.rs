//! Tab content registry - единственный источник правды для маппинга route → View
//!
//! Таб хранит разобранный `Route` и, если его открыли с другого экрана,
//! контекст навигации. Всё остальное восстанавливается по ключу.

use crate::dashboards::RevenueReportsDashboard;
use crate::domain::a001_province::ui::{details::ProvinceDetails, list::ProvinceList};
use crate::domain::a002_district::ui::{details::DistrictDetails, list::DistrictList};
use crate::domain::a003_city::ui::{details::CityDetails, list::CityList};
use crate::domain::a004_role::ui::{details::RoleDetails, list::RoleList};
use crate::domain::a005_customer::ui::{details::CustomerDetails, list::CustomerList};
use crate::domain::a006_parking_owner::ui::{details::ParkingOwnerDetails, list::ParkingOwnerList};
use crate::domain::a007_parking_area::ui::{details::ParkingAreaDetails, list::ParkingAreaList};
use crate::domain::a008_parking_slot::ui::{details::ParkingSlotDetails, list::ParkingSlotList};
use crate::domain::a009_subscription_fee::ui::{
    details::SubscriptionFeeDetails, list::SubscriptionFeeList,
};
use crate::layout::global_context::Tab;
use contracts::domain::common::ResourceKind;
use contracts::shared::navigation::{NavigationContext, Route};
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба.
///
/// Unknown keys render a placeholder.
pub fn render_tab_content(tab: &Tab) -> AnyView {
    let Some(route) = tab.route.clone() else {
        log!("⚠️ Unknown tab type: {}", tab.key);
        return view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any();
    };

    match route {
        Route::List {
            resource,
            status_filter,
        } => render_list(resource, status_filter),
        Route::Detail { resource, id } => render_detail(resource, id, tab.key.clone(), tab.nav.clone()),
        Route::Reports => {
            log!("✅ Creating RevenueReportsDashboard");
            view! { <RevenueReportsDashboard /> }.into_any()
        }
    }
}

fn render_list(resource: ResourceKind, status_filter: bool) -> AnyView {
    let status_filter = Some(status_filter);
    match resource {
        ResourceKind::Province => view! { <ProvinceList status_filter=status_filter /> }.into_any(),
        ResourceKind::District => view! { <DistrictList status_filter=status_filter /> }.into_any(),
        ResourceKind::City => view! { <CityList status_filter=status_filter /> }.into_any(),
        ResourceKind::Role => view! { <RoleList status_filter=status_filter /> }.into_any(),
        ResourceKind::Customer => view! { <CustomerList status_filter=status_filter /> }.into_any(),
        ResourceKind::ParkingOwner => {
            view! { <ParkingOwnerList status_filter=status_filter /> }.into_any()
        }
        ResourceKind::ParkingArea => {
            view! { <ParkingAreaList status_filter=status_filter /> }.into_any()
        }
        ResourceKind::ParkingSlot => {
            view! { <ParkingSlotList status_filter=status_filter /> }.into_any()
        }
        ResourceKind::SubscriptionFee => {
            view! { <SubscriptionFeeList status_filter=status_filter /> }.into_any()
        }
    }
}

fn render_detail(
    resource: ResourceKind,
    id: String,
    tab_key: String,
    nav: Option<NavigationContext>,
) -> AnyView {
    log!("✅ Creating {} detail with id: {}", resource.key(), id);
    match resource {
        ResourceKind::Province => {
            view! { <ProvinceDetails id=id tab_key=tab_key nav=nav /> }.into_any()
        }
        ResourceKind::District => {
            view! { <DistrictDetails id=id tab_key=tab_key nav=nav /> }.into_any()
        }
        ResourceKind::City => view! { <CityDetails id=id tab_key=tab_key nav=nav /> }.into_any(),
        ResourceKind::Role => view! { <RoleDetails id=id tab_key=tab_key nav=nav /> }.into_any(),
        ResourceKind::Customer => {
            view! { <CustomerDetails id=id tab_key=tab_key nav=nav /> }.into_any()
        }
        ResourceKind::ParkingOwner => {
            view! { <ParkingOwnerDetails id=id tab_key=tab_key nav=nav /> }.into_any()
        }
        ResourceKind::ParkingArea => {
            view! { <ParkingAreaDetails id=id tab_key=tab_key nav=nav /> }.into_any()
        }
        ResourceKind::ParkingSlot => {
            view! { <ParkingSlotDetails id=id tab_key=tab_key nav=nav /> }.into_any()
        }
        ResourceKind::SubscriptionFee => {
            view! { <SubscriptionFeeDetails id=id tab_key=tab_key nav=nav /> }.into_any()
        }
    }
}
