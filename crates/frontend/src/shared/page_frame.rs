//! PageFrame: корневой контейнер каждой страницы внутри таба.
//!
//! Root element carries `id="{entity}--{category}"` (e.g. `"a003_city--list"`)
//! and `data-page-category`, so a DOM id copied from the inspector leads
//! straight to `domain/a003_city/`.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
pub const PAGE_CAT_SYSTEM: &str = "system";

/// `{entity}--{category}`
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}

pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

fn base_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    #[prop(into)] page_id: String,
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        base_class(category).to_string()
    } else {
        format!("{} {class}", base_class(category))
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        let id = page_id("a003_city", PAGE_CAT_LIST);
        assert_eq!(id, "a003_city--list");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a003_city"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn detail_and_dashboard_get_modifiers() {
        assert_eq!(base_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(base_class(PAGE_CAT_DASHBOARD), "page page--dashboard");
        assert_eq!(base_class(PAGE_CAT_SYSTEM), "page");
    }
}
