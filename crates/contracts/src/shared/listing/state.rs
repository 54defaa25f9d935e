use super::filter::{apply_filters, ListFilter};
use super::pagination::{clamp_page, paginate, total_pages, Page, PAGE_SIZE};
use crate::domain::common::Listable;
use std::collections::HashSet;

/// Состояние фильтров одного экземпляра списка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub status_filter: bool,
    pub search_term: String,
    /// 1-based
    pub current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            status_filter: true,
            search_term: String::new(),
            current_page: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Ready,
    Mutating,
    Error,
}

/// Ticket handed out by [`ListState::begin_load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub(crate) const fn issued(generation: u64) -> Self {
        Self(generation)
    }
}

/// Состояние списочного экрана
///
/// Owned by exactly one screen instance. Filtering and paging work on
/// `items` in memory; only loads and mutations touch the network.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub filter: FilterState,
    pub scope_parent_id: Option<String>,
    pub page_size: usize,
    pub phase: ListPhase,
    pub last_error: Option<String>,
    pending: HashSet<String>,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl<T> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filter: FilterState::default(),
            scope_parent_id: None,
            page_size: page_size.max(1),
            phase: ListPhase::Loading,
            last_error: None,
            pending: HashSet::new(),
            generation: 0,
        }
    }

    pub fn scoped(parent_id: Option<String>, page_size: usize) -> Self {
        Self {
            scope_parent_id: parent_id,
            ..Self::new(page_size)
        }
    }

    pub fn with_status(mut self, status_filter: bool) -> Self {
        self.filter.status_filter = status_filter;
        self
    }

    pub fn list_filter(&self) -> ListFilter {
        ListFilter {
            status_filter: self.filter.status_filter,
            search_term: self.filter.search_term.clone(),
            scope_parent_id: self.scope_parent_id.clone(),
        }
    }

    pub fn set_search(&mut self, term: String) {
        self.filter.search_term = term;
        self.filter.current_page = 1;
    }

    /// Returns `true` when the status actually changed (a refetch is due)
    pub fn set_status(&mut self, status_filter: bool) -> bool {
        if self.filter.status_filter == status_filter {
            return false;
        }
        self.filter.status_filter = status_filter;
        self.filter.current_page = 1;
        true
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = ListPhase::Loading;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a load result. Stale tickets are ignored and `false` is returned.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<T>, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.last_error = None;
                self.phase = if self.pending.is_empty() {
                    ListPhase::Ready
                } else {
                    ListPhase::Mutating
                };
            }
            Err(message) => {
                // stale rows stay on screen
                self.last_error = Some(message);
                self.phase = ListPhase::Error;
            }
        }
        true
    }

    /// Mark a row busy. `false` if it is already busy or the list is loading.
    pub fn begin_mutation(&mut self, id: &str) -> bool {
        if self.phase == ListPhase::Loading || self.pending.contains(id) {
            return false;
        }
        self.pending.insert(id.to_string());
        self.phase = ListPhase::Mutating;
        true
    }

    pub fn finish_mutation(&mut self, id: &str, error: Option<String>) {
        self.pending.remove(id);
        match error {
            Some(message) => {
                self.last_error = Some(message);
                self.phase = ListPhase::Error;
            }
            None if self.phase == ListPhase::Mutating && self.pending.is_empty() => {
                self.phase = ListPhase::Ready;
            }
            None => {}
        }
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    /// Row actions are blocked while loading and while that row is busy
    pub fn row_actions_enabled(&self, id: &str) -> bool {
        self.phase != ListPhase::Loading && !self.is_pending(id)
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }
}

impl<T: Listable> ListState<T> {
    pub fn filtered(&self) -> Vec<T> {
        apply_filters(&self.items, &self.list_filter())
    }

    /// Current page of the filtered rows, page clamped first
    pub fn visible(&self) -> Page<T> {
        let filtered = self.filtered();
        let total = total_pages(filtered.len(), self.page_size);
        paginate(&filtered, clamp_page(self.filter.current_page, total), self.page_size)
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total = total_pages(self.total_filtered(), self.page_size);
        self.filter.current_page = clamp_page(page, total);
    }

    pub fn total_filtered(&self) -> usize {
        self.filtered().len()
    }
}
