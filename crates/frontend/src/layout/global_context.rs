//! Хранилище открытых табов
//!
//! Every screen of the console is a tab keyed by its route. The active key
//! is mirrored into `?active=` so a reload reopens the same screen.

use crate::layout::tabs::tab_label_for_route;
use contracts::shared::navigation::{NavigationContext, Route};
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const ACTIVE_PARAM: &str = "active";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

/// Открытый таб
///
/// `nav` is the navigation context handed over when the tab was opened
/// from another screen. It lives only as long as the tab does.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub key: String,
    pub title: String,
    pub route: Option<Route>,
    pub nav: Option<NavigationContext>,
}

impl Tab {
    fn for_route(route: Route, nav: Option<NavigationContext>) -> Self {
        let title = tab_label_for_route(&route, nav.as_ref().map(|c| c.parent.label.as_str()));
        Self {
            key: route.key(),
            title,
            route: Some(route),
            nav,
        }
    }
}

/// `?active=a003_city_detail_c1` -> `a003_city_detail_c1`
fn active_from_query(search: &str) -> Option<String> {
    let mut params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    params.remove(ACTIVE_PARAM).filter(|key| !key.is_empty())
}

fn query_for_active(key: &str) -> String {
    let params = HashMap::from([(ACTIVE_PARAM, key)]);
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

/// Right neighbour of the closed tab, else the left one
fn neighbour_after_close(tabs: &[Tab], closed_at: usize) -> Option<String> {
    tabs.get(closed_at)
        .or_else(|| closed_at.checked_sub(1).and_then(|i| tabs.get(i)))
        .map(|tab| tab.key.clone())
}

/// Swap `key` for `tab` at the same position. An existing tab with the
/// new key is reused and the old one dropped.
fn replace_in_place(tabs: &mut Vec<Tab>, key: &str, tab: Tab) {
    if tabs.iter().any(|t| t.key == tab.key) {
        if tab.key != key {
            tabs.retain(|t| t.key != key);
        }
        return;
    }
    match tabs.iter().position(|t| t.key == key) {
        Some(index) => tabs[index] = tab,
        None => tabs.push(tab),
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Reopens the tab named in `?active=` and keeps the query in sync.
    ///
    /// A tab restored this way has no navigation context.
    pub fn init_router_integration(&self) {
        if let Some(key) = active_from_query(&current_search()) {
            log::info!("restoring tab {key} from the address bar");
            self.open_key(&key);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(key) = this.active.get() else {
                return;
            };
            let target = query_for_active(&key);
            if current_search() == target {
                return;
            }
            let replaced = window()
                .and_then(|w| w.history().ok())
                .map(|h| h.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target)));
            if !matches!(replaced, Some(Ok(()))) {
                log::warn!("could not sync address bar to {key}");
            }
        });
    }

    /// Open a tab from a bare key (reload, sidebar). Unknown keys get a placeholder tab.
    pub fn open_key(&self, key: &str) {
        match Route::from_key(key) {
            Some(route) => self.open_route(route, None),
            None => {
                log::warn!("unknown tab key {key}");
                self.push_tab(Tab {
                    key: key.to_string(),
                    title: key.to_string(),
                    route: None,
                    nav: None,
                })
            }
        }
    }

    /// Open (or re-activate) the tab for `route`, handing `nav` to a newly created tab
    pub fn open_route(&self, route: Route, nav: Option<NavigationContext>) {
        self.push_tab(Tab::for_route(route, nav));
    }

    fn push_tab(&self, tab: Tab) {
        let key = tab.key.clone();
        let added = self.opened.try_update(|tabs| {
            if tabs.iter().any(|t| t.key == key) {
                false
            } else {
                tabs.push(tab);
                true
            }
        });
        log::debug!(
            "open tab {key}: {}",
            if added == Some(true) { "new" } else { "already open" }
        );
        self.activate_tab(&key);
    }

    pub fn activate_tab(&self, key: &str) {
        let _ = self.active.try_set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        let _ = self.opened.try_update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        let next = self.opened.try_update(|tabs| {
            let index = tabs.iter().position(|t| t.key == key)?;
            tabs.remove(index);
            neighbour_after_close(tabs, index)
        }).flatten();
        let was_active = self
            .active
            .try_with_untracked(|active| active.as_deref() == Some(key))
            .unwrap_or(false);
        if was_active {
            log::debug!("closed active tab {key}, next {next:?}");
            let _ = self.active.try_set(next);
        }
    }

    /// Replace the current tab with `route` in the same slot (back buttons, redirects)
    pub fn replace_tab(&self, current_key: &str, route: Route, nav: Option<NavigationContext>) {
        let tab = Tab::for_route(route, nav);
        let key = tab.key.clone();
        log::debug!("replace tab {current_key} -> {key}");
        let _ = self
            .opened
            .try_update(|tabs| replace_in_place(tabs, current_key, tab));
        self.activate_tab(&key);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_tabs() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_else(|| {
        log::error!("AppGlobalContext not provided, tabs will not open");
        AppGlobalContext::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(key: &str) -> Tab {
        Tab {
            key: key.to_string(),
            title: key.to_string(),
            route: Route::from_key(key),
            nav: None,
        }
    }

    fn keys(tabs: &[Tab]) -> Vec<&str> {
        tabs.iter().map(|t| t.key.as_str()).collect()
    }

    #[test]
    fn active_key_round_trips_through_the_query() {
        let query = query_for_active("a003_city_detail_c1");
        assert_eq!(query, "?active=a003_city_detail_c1");
        assert_eq!(active_from_query(&query).as_deref(), Some("a003_city_detail_c1"));
        assert_eq!(active_from_query("?active="), None);
        assert_eq!(active_from_query(""), None);
    }

    #[test]
    fn closing_prefers_the_right_neighbour() {
        let mut tabs = vec![tab("a"), tab("b"), tab("c")];
        tabs.remove(1);
        assert_eq!(neighbour_after_close(&tabs, 1).as_deref(), Some("c"));
        tabs.remove(1);
        assert_eq!(neighbour_after_close(&tabs, 1).as_deref(), Some("a"));
        tabs.remove(0);
        assert_eq!(neighbour_after_close(&tabs, 0), None);
    }

    #[test]
    fn replace_keeps_the_slot() {
        let mut tabs = vec![tab("a"), tab("detail"), tab("c")];
        replace_in_place(&mut tabs, "detail", tab("list"));
        assert_eq!(keys(&tabs), vec!["a", "list", "c"]);
    }

    #[test]
    fn replace_reuses_an_open_target() {
        let mut tabs = vec![tab("list"), tab("detail")];
        replace_in_place(&mut tabs, "detail", tab("list"));
        assert_eq!(keys(&tabs), vec!["list"]);

        let mut tabs = vec![tab("a")];
        replace_in_place(&mut tabs, "gone", tab("b"));
        assert_eq!(keys(&tabs), vec!["a", "b"]);
    }
}
