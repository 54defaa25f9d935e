//! Контекст иерархической навигации
//!
//! A value passed down the chain of screens the user actually walks
//! (province → district → city). It is cloned into each opened tab and
//! never stored anywhere else, so a reload or a directly typed key
//! arrives without it.

use super::route::Route;
use crate::domain::common::{Listable, ResourceKind};
use serde::{Deserialize, Serialize};

pub const CONTEXT_VERSION: u32 = 1;

/// Ссылка на сущность: вид, id и имя для заголовков/крошек
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub resource: ResourceKind,
    pub id: String,
    pub label: String,
}

impl EntityRef {
    pub fn of<T: Listable>(entity: &T) -> Self {
        Self {
            resource: T::kind(),
            id: entity.id().to_string(),
            label: entity.label().to_string(),
        }
    }

    pub fn route(&self) -> Route {
        Route::detail(self.resource, self.id.clone())
    }
}

/// Предок в цепочке вместе со статусом списка, из которого его открыли
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    pub entity: EntityRef,
    pub status_filter: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    pub version: u32,
    /// Entity whose detail screen receives this context
    pub parent: EntityRef,
    /// Root first
    pub ancestors: Vec<Crumb>,
    /// Status the list showing `parent` had when it was picked
    pub status_filter: bool,
    /// Status to restore on the child list embedded in the parent's screen
    pub child_status_filter: Option<bool>,
}

/// Результат чтения контекста на входе в экран
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Received {
    Present(NavigationContext),
    Absent,
}

/// What a detail screen does when it was entered without a context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Load the entity by the id from the tab key
    Refetch { resource: ResourceKind, id: String },
    /// Nothing usable in the key; go to the list instead
    Redirect(Route),
}

/// Куда ведёт кнопка "назад"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackTarget {
    pub route: Route,
    pub context: Option<NavigationContext>,
}

pub fn build_context<T: Listable>(
    current: &T,
    ancestors: Vec<Crumb>,
    status_filter: bool,
) -> NavigationContext {
    NavigationContext {
        version: CONTEXT_VERSION,
        parent: EntityRef::of(current),
        ancestors,
        status_filter,
        child_status_filter: None,
    }
}

/// Context for a child picked from the list embedded in `context.parent`'s screen
pub fn descend<T: Listable>(
    context: &NavigationContext,
    child: &T,
    child_list_status: bool,
) -> NavigationContext {
    let mut ancestors = context.ancestors.clone();
    ancestors.push(Crumb {
        entity: context.parent.clone(),
        status_filter: context.status_filter,
    });
    build_context(child, ancestors, child_list_status)
}

/// Accept `received` only if it was built for exactly this screen
pub fn consume_context(received: Option<NavigationContext>, route: &Route) -> Received {
    match (received, route) {
        (Some(context), Route::Detail { resource, id })
            if context.version == CONTEXT_VERSION
                && context.parent.resource == *resource
                && context.parent.id == *id =>
        {
            Received::Present(context)
        }
        _ => Received::Absent,
    }
}

pub fn fallback_for(resource: ResourceKind, id: &str) -> Fallback {
    let id = id.trim();
    if id.is_empty() {
        Fallback::Redirect(Route::list(resource))
    } else {
        Fallback::Refetch {
            resource,
            id: id.to_string(),
        }
    }
}

/// Back from `context.parent`'s screen, restoring the filter the user had there
pub fn round_trip(context: &NavigationContext) -> BackTarget {
    let mut ancestors = context.ancestors.clone();
    match ancestors.pop() {
        Some(crumb) => BackTarget {
            route: crumb.entity.route(),
            context: Some(NavigationContext {
                version: context.version,
                parent: crumb.entity,
                ancestors,
                status_filter: crumb.status_filter,
                child_status_filter: Some(context.status_filter),
            }),
        },
        None => BackTarget {
            route: Route::List {
                resource: context.parent.resource,
                status_filter: context.status_filter,
            },
            context: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_province::Province;
    use crate::domain::a002_district::District;
    use crate::domain::a003_city::City;

    fn province() -> Province {
        Province {
            id: "p1".into(),
            name: "Central".into(),
            is_active: false,
            ..Province::default()
        }
    }

    fn district() -> District {
        District {
            id: "d7".into(),
            name: "Kandy".into(),
            province_id: "p1".into(),
            is_active: true,
            ..District::default()
        }
    }

    #[test]
    fn build_is_plain_data() {
        let context = build_context(&province(), Vec::new(), false);
        assert_eq!(context.version, CONTEXT_VERSION);
        assert_eq!(context.parent.label, "Central");
        assert_eq!(context.parent.resource, ResourceKind::Province);
        assert!(context.ancestors.is_empty());
    }

    #[test]
    fn back_from_root_restores_list_status() {
        let context = build_context(&province(), Vec::new(), false);
        let back = round_trip(&context);
        assert_eq!(
            back.route,
            Route::List {
                resource: ResourceKind::Province,
                status_filter: false
            }
        );
        assert_eq!(back.context, None);
    }

    #[test]
    fn back_from_child_reproduces_parent_context() {
        let at_province = build_context(&province(), Vec::new(), false);
        let at_district = descend(&at_province, &district(), true);
        assert_eq!(at_district.ancestors.len(), 1);

        let back = round_trip(&at_district);
        assert_eq!(back.route, Route::detail(ResourceKind::Province, "p1"));
        let restored = back.context.unwrap();
        assert_eq!(restored.parent, at_province.parent);
        assert_eq!(restored.status_filter, at_province.status_filter);
        assert_eq!(restored.child_status_filter, Some(true));
    }

    #[test]
    fn three_levels_unwind_in_order() {
        let city = City {
            id: "c3".into(),
            name: "Peradeniya".into(),
            district_id: "d7".into(),
            is_active: false,
            ..City::default()
        };
        let at_city = descend(
            &descend(&build_context(&province(), Vec::new(), true), &district(), true),
            &city,
            false,
        );

        let to_district = round_trip(&at_city);
        assert_eq!(to_district.route, Route::detail(ResourceKind::District, "d7"));
        let to_province = round_trip(&to_district.context.unwrap());
        assert_eq!(to_province.route, Route::detail(ResourceKind::Province, "p1"));
        let to_list = round_trip(&to_province.context.unwrap());
        assert_eq!(to_list.route, Route::list(ResourceKind::Province));
    }

    #[test]
    fn matching_context_is_present() {
        let context = build_context(&district(), Vec::new(), true);
        let route = Route::detail(ResourceKind::District, "d7");
        assert_eq!(
            consume_context(Some(context.clone()), &route),
            Received::Present(context)
        );
    }

    #[test]
    fn missing_or_foreign_context_is_absent() {
        let route = Route::detail(ResourceKind::District, "d7");
        assert_eq!(consume_context(None, &route), Received::Absent);

        let other = build_context(&province(), Vec::new(), true);
        assert_eq!(consume_context(Some(other), &route), Received::Absent);

        let mut old = build_context(&district(), Vec::new(), true);
        old.version = 0;
        assert_eq!(consume_context(Some(old), &route), Received::Absent);
    }

    #[test]
    fn fallback_prefers_refetch() {
        assert_eq!(
            fallback_for(ResourceKind::City, "c3"),
            Fallback::Refetch {
                resource: ResourceKind::City,
                id: "c3".into()
            }
        );
        assert_eq!(
            fallback_for(ResourceKind::City, "  "),
            Fallback::Redirect(Route::list(ResourceKind::City))
        );
    }
}
