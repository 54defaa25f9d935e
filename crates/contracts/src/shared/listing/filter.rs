use crate::domain::common::Listable;

/// Фильтр списочного экрана
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    /// `true` shows active records, `false` shows inactive ones
    pub status_filter: bool,
    pub search_term: String,
    /// When set, only children of this parent pass
    pub scope_parent_id: Option<String>,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            status_filter: true,
            search_term: String::new(),
            scope_parent_id: None,
        }
    }
}

impl ListFilter {
    pub fn scoped(parent_id: impl Into<String>) -> Self {
        Self {
            scope_parent_id: Some(parent_id.into()),
            ..Self::default()
        }
    }

    pub fn matches<T: Listable>(&self, entity: &T) -> bool {
        if entity.is_active() != self.status_filter {
            return false;
        }
        if let Some(scope) = self.scope_parent_id.as_deref() {
            if entity.parent_id() != Some(scope) {
                return false;
            }
        }
        let term = &self.search_term;
        term.is_empty() || entity.label().to_lowercase().contains(&term.to_lowercase())
    }
}

/// Отфильтровать коллекцию, сохраняя серверный порядок
pub fn apply_filters<T: Listable>(entities: &[T], filter: &ListFilter) -> Vec<T> {
    entities
        .iter()
        .filter(|entity| filter.matches(*entity))
        .cloned()
        .collect()
}
