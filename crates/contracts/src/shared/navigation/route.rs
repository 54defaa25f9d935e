use crate::domain::common::ResourceKind;

/// Tab key of the revenue reports dashboard
pub const REPORTS_KEY: &str = "d400_revenue_reports";

/// Экран приложения, адресуемый ключом таба
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List {
        resource: ResourceKind,
        status_filter: bool,
    },
    Detail {
        resource: ResourceKind,
        id: String,
    },
    Reports,
}

impl Route {
    pub fn list(resource: ResourceKind) -> Self {
        Route::List {
            resource,
            status_filter: true,
        }
    }

    pub fn detail(resource: ResourceKind, id: impl Into<String>) -> Self {
        Route::Detail {
            resource,
            id: id.into(),
        }
    }

    /// Canonical key; the status filter is not part of it
    pub fn key(&self) -> String {
        match self {
            Route::List { resource, .. } => resource.key().to_string(),
            Route::Detail { resource, id } => format!("{}{}", resource.detail_prefix(), id),
            Route::Reports => REPORTS_KEY.to_string(),
        }
    }

    /// Parse a tab key back. A list key comes back with the default status.
    pub fn from_key(key: &str) -> Option<Self> {
        if key == REPORTS_KEY {
            return Some(Route::Reports);
        }
        for resource in ResourceKind::ALL {
            if let Some(id) = key.strip_prefix(&resource.detail_prefix()) {
                return Some(Route::detail(resource, id));
            }
        }
        ResourceKind::from_key(key).map(Route::list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_key_round_trip() {
        let route = Route::detail(ResourceKind::District, "65f0c2a1");
        assert_eq!(route.key(), "a002_district_detail_65f0c2a1");
        assert_eq!(Route::from_key(&route.key()), Some(route));
    }

    #[test]
    fn list_and_reports_keys() {
        assert_eq!(
            Route::from_key("a006_parking_owner"),
            Some(Route::list(ResourceKind::ParkingOwner))
        );
        assert_eq!(Route::from_key(REPORTS_KEY), Some(Route::Reports));
        assert_eq!(Route::from_key("a042_marketplace"), None);
    }

    #[test]
    fn detail_key_without_id_parses_to_empty_id() {
        assert_eq!(
            Route::from_key("a003_city_detail_"),
            Some(Route::detail(ResourceKind::City, ""))
        );
    }
}
