//! Tab labels - единственный источник правды для заголовков табов.

use contracts::shared::navigation::Route;

pub const REPORTS_LABEL: &str = "Revenue reports";

/// Заголовок таба для маршрута. `label` is the entity name when it is known.
pub fn tab_label_for_route(route: &Route, label: Option<&str>) -> String {
    match route {
        Route::List { resource, .. } => resource.list_name().to_string(),
        Route::Detail { resource, id } => {
            detail_tab_label(resource.element_name(), label.unwrap_or(id))
        }
        Route::Reports => REPORTS_LABEL.to_string(),
    }
}

/// Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    Route::from_key(key)
        .map(|route| tab_label_for_route(&route, None))
        .unwrap_or_else(|| key.to_string())
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ResourceKind;

    #[test]
    fn list_labels_use_plural_names() {
        assert_eq!(tab_label_for_key("a002_district"), "Districts");
        assert_eq!(tab_label_for_key("d400_revenue_reports"), REPORTS_LABEL);
    }

    #[test]
    fn detail_label_prefers_entity_name() {
        let route = Route::detail(ResourceKind::Province, "65f0");
        assert_eq!(tab_label_for_route(&route, Some("Western")), "Province · Western");
        assert_eq!(tab_label_for_route(&route, None), "Province · 65f0");
    }

    #[test]
    fn unknown_key_is_its_own_label() {
        assert_eq!(tab_label_for_key("x_unknown"), "x_unknown");
    }
}
